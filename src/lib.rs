// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod birth_date;
mod checksum;
mod clock;
mod codec;
mod date_format;
mod error;
mod gender;
mod regions;
mod stats;

// This is the public API of the CNP codec library
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{Cnp, CnpFacts, CNP_LENGTH, INVALID_CNP, INVALID_DATE};
pub use error::CnpParseError;
pub use gender::Gender;
pub use regions::region_name;
