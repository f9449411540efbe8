use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::birth_date;
use crate::checksum;
use crate::clock::{Clock, SystemClock};
use crate::date_format::format_date;
use crate::error::CnpParseError;
use crate::gender::Gender;
use crate::regions;
use crate::stats::DecodeStats;

/// A CNP is always exactly 13 decimal digits.
pub const CNP_LENGTH: usize = 13;

// The identity-card rule is "strictly older than 14 whole years".
const IDENTITY_CARD_AGE_THRESHOLD: u32 = 14;

/// What the `Display` impl renders when the current candidate is
/// invalid.
pub const INVALID_CNP: &str = "Invalid CNP";

/// What [`Cnp::format_birth_date`] renders when the current candidate
/// is invalid.
pub const INVALID_DATE: &str = "Invalid date";

/// Everything derived from an accepted candidate. Only built once all
/// checks have passed, so any value of this type is internally
/// consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Decoded {
    digits: [u8; CNP_LENGTH],
    birth_date: NaiveDate,
    region_name: &'static str,
}

impl Decoded {
    fn sentinel(&self) -> u8 {
        self.digits[0]
    }

    /// The serial assigned within the birth-date/region bucket, with
    /// leading zeros kept.
    fn serial_number(&self) -> String {
        format!("{}{}{}", self.digits[9], self.digits[10], self.digits[11])
    }

    fn cnp_string(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

/// Validating decoder for the Romanian CNP (Cod Numeric Personal), the
/// 13-digit national identity number laid out as
/// `|S|YY|MM|DD|CC|XXX|C|`.
///
/// A handle is seeded with a candidate string and holds either the
/// decoded record or the reason the candidate was rejected; [`Cnp::set`]
/// reseeds it, re-deriving everything from scratch. Validation is
/// purely structural, so a well-formed number that was never issued to
/// a real person is still accepted.
///
/// Rejected candidates are a normal state, not an error state: every
/// accessor degrades to a documented fallback instead of panicking.
pub struct Cnp {
    clock: Arc<dyn Clock>,
    stats: DecodeStats,
    decoded: Result<Decoded, CnpParseError>,
}

impl Cnp {
    /// Decodes `input` against the system clock.
    pub fn new(input: &str) -> Self {
        Self::with_clock(input, Arc::new(SystemClock))
    }

    /// Decodes `input` against an injected clock. The clock drives
    /// century selection for sentinels 7-9 (read at decode time) and
    /// the identity-card age check (read on every call).
    pub fn with_clock(input: &str, clock: Arc<dyn Clock>) -> Self {
        let stats = DecodeStats::new();
        let decoded = decode(input, clock.today());
        stats.record_outcome(decoded.is_ok());
        Cnp {
            clock,
            stats,
            decoded,
        }
    }

    /// Replaces the candidate and re-derives all state. Nothing of the
    /// previous candidate survives a reseed.
    pub fn set(&mut self, input: &str) {
        self.decoded = decode(input, self.clock.today());
        self.stats.record_outcome(self.decoded.is_ok());
    }

    pub fn is_valid(&self) -> bool {
        self.decoded.is_ok()
    }

    /// Why the current candidate was rejected, if it was.
    pub fn error(&self) -> Option<&CnpParseError> {
        self.decoded.as_ref().err()
    }

    /// The encoded birth date. It may lie in the future; the codec
    /// checks format, not plausibility.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.decoded.as_ref().ok().map(|d| d.birth_date)
    }

    /// The birth date rendered with the moment-style tokens `YYYY`,
    /// `YY`, `MM` and `DD`; other pattern characters pass through. The
    /// conventional pattern is `"YYYY-MM-DD"`. Invalid candidates
    /// render as [`INVALID_DATE`].
    pub fn format_birth_date(&self, pattern: &str) -> String {
        match &self.decoded {
            Ok(decoded) => format_date(decoded.birth_date, pattern),
            Err(_) => INVALID_DATE.to_string(),
        }
    }

    /// County or Bucharest sector that issued the number.
    pub fn birth_place(&self) -> Option<&'static str> {
        self.decoded.as_ref().ok().map(|d| d.region_name)
    }

    /// Gender encoded by the sentinel digit. `None` both for invalid
    /// candidates and for foreign citizens (sentinel 9).
    pub fn gender(&self) -> Option<Gender> {
        let decoded = self.decoded.as_ref().ok()?;
        Gender::from_sentinel(decoded.sentinel())
    }

    /// Gender as one of two caller-chosen labels, or `""` when no
    /// gender is encoded. [`Gender`] itself displays as the
    /// conventional `"male"` / `"female"` pair.
    pub fn gender_label(&self, male: &str, female: &str) -> String {
        match self.gender() {
            Some(gender) => gender.label(male, female).to_string(),
            None => String::new(),
        }
    }

    /// Whether the holder is past the identity-card age, strictly more
    /// than 14 whole years old as of the clock's today. Future birth
    /// dates count as not yet of age.
    pub fn has_identity_card(&self) -> bool {
        match self.birth_date() {
            Some(birth_date) => self
                .clock
                .today()
                .years_since(birth_date)
                .map_or(false, |age| age > IDENTITY_CARD_AGE_THRESHOLD),
            None => false,
        }
    }

    /// The 3-digit serial as written in the number, or `""` when
    /// invalid.
    pub fn serial_number(&self) -> String {
        self.decoded
            .as_ref()
            .ok()
            .map(Decoded::serial_number)
            .unwrap_or_default()
    }

    /// Everything the number encodes, as one serializable record.
    pub fn facts(&self) -> Option<CnpFacts> {
        let decoded = self.decoded.as_ref().ok()?;
        Some(CnpFacts {
            cnp: decoded.cnp_string(),
            birth_date: decoded.birth_date,
            birth_place: decoded.region_name,
            gender: Gender::from_sentinel(decoded.sentinel()),
            serial_number: decoded.serial_number(),
        })
    }
}

impl Default for Cnp {
    /// An empty handle, ready to be reseeded. It rejects the empty
    /// candidate.
    fn default() -> Self {
        Cnp::new("")
    }
}

/// Renders the accepted 13 digits exactly as seeded, or [`INVALID_CNP`].
impl fmt::Display for Cnp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decoded {
            Ok(decoded) => f.write_str(&decoded.cnp_string()),
            Err(_) => f.write_str(INVALID_CNP),
        }
    }
}

impl fmt::Debug for Cnp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cnp")
            .field("decoded", &self.decoded)
            .finish_non_exhaustive()
    }
}

/// The facts a valid CNP encodes.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CnpFacts {
    pub cnp: String,
    pub birth_date: NaiveDate,
    pub birth_place: &'static str,
    pub gender: Option<Gender>,
    pub serial_number: String,
}

/// Runs the full decode pipeline. The checks run in a fixed order, so
/// the reported error is the first failing stage: shape, birth date,
/// region, checksum.
fn decode(input: &str, today: NaiveDate) -> Result<Decoded, CnpParseError> {
    let digits = parse_digits(input)?;
    let birth_date = birth_date::resolve(&digits, today)?;

    let region_code = format!("{}{}", digits[7], digits[8]);
    let region_name = regions::region_name(&region_code)
        .ok_or(CnpParseError::UnknownRegion { code: region_code })?;

    if checksum::check_digit(&digits) != digits[12] {
        return Err(CnpParseError::ChecksumMismatch);
    }

    Ok(Decoded {
        digits,
        birth_date,
        region_name,
    })
}

/// Accepts exactly 13 decimal digits. Any other character rejects the
/// candidate outright rather than being skipped over.
fn parse_digits(input: &str) -> Result<[u8; CNP_LENGTH], CnpParseError> {
    let length = input.chars().count();
    if length != CNP_LENGTH {
        return Err(CnpParseError::WrongLength { length });
    }

    let mut digits = [0u8; CNP_LENGTH];
    for (position, c) in input.chars().enumerate() {
        match c.to_digit(10) {
            Some(digit) => digits[position] = digit as u8,
            None => return Err(CnpParseError::NonDigit { position }),
        }
    }
    Ok(digits)
}
