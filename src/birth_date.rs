use chrono::{Datelike, NaiveDate};

use crate::codec::CNP_LENGTH;
use crate::error::CnpParseError;

// Bounds of the representable window. Century selection can only land
// inside it, but the range check stays as an explicit guard.
const MIN_BIRTH_YEAR: i32 = 1800;
const MAX_BIRTH_YEAR: i32 = 2099;

/// Resolves the birth date encoded by the sentinel (position 0), the
/// two-digit year (1-2), the month (3-4) and the day (5-6). Month and
/// day get no standalone range checks; the calendar lookup rejects
/// impossible combinations, leap days included.
pub(crate) fn resolve(
    digits: &[u8; CNP_LENGTH],
    today: NaiveDate,
) -> Result<NaiveDate, CnpParseError> {
    let two_digit_year = i32::from(digits[1]) * 10 + i32::from(digits[2]);
    let year =
        derive_year(digits[0], two_digit_year, today).ok_or(CnpParseError::InvalidBirthDate)?;

    let month = u32::from(digits[3]) * 10 + u32::from(digits[4]);
    let day = u32::from(digits[5]) * 10 + u32::from(digits[6]);
    let birth_date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(CnpParseError::InvalidBirthDate)?;

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&birth_date.year()) {
        return Err(CnpParseError::BirthDateOutOfRange);
    }
    Ok(birth_date)
}

/// Century selection. Sentinels 7 and 8 (residents) and 9 (foreign
/// citizens) mean the most recent year with these last two digits that
/// is not in the future. Sentinel 0 selects no century, so such a
/// candidate can never form a date.
fn derive_year(sentinel: u8, two_digit_year: i32, today: NaiveDate) -> Option<i32> {
    match sentinel {
        // citizens born 1900-1999
        1 | 2 => Some(1900 + two_digit_year),
        // citizens born 1800-1899
        3 | 4 => Some(1800 + two_digit_year),
        // citizens born 2000-2099
        5 | 6 => Some(2000 + two_digit_year),
        7 | 8 | 9 => {
            if two_digit_year > today.year() % 100 {
                Some(1900 + two_digit_year)
            } else {
                Some(2000 + two_digit_year)
            }
        }
        _ => None,
    }
}
