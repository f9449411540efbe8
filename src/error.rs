use thiserror::Error;

/// Why a candidate string was rejected. Rejection is an expected
/// outcome, not a failure: the codec stores the error and every
/// accessor degrades to its documented fallback instead of panicking.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum CnpParseError {
    #[error("a CNP is exactly 13 characters, got {length}")]
    WrongLength { length: usize },

    #[error("expected a decimal digit at position {position}")]
    NonDigit { position: usize },

    #[error("the year, month and day digits do not form a calendar date")]
    InvalidBirthDate,

    #[error("the birth date falls outside the years 1800 through 2099")]
    BirthDateOutOfRange,

    #[error("unknown region code {code}")]
    UnknownRegion { code: String },

    #[error("the check digit does not match the weighted checksum")]
    ChecksumMismatch,
}
