use chrono::{NaiveDate, Utc};

/// Source of "today" for the two time-relative rules: century selection
/// for sentinel digits 7, 8 and 9, and the identity-card age check.
/// Implementations must be cheap to call; the codec reads the clock on
/// every decode.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The wall clock, in UTC. This is what `Cnp::new` uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A pinned date, for tests and for validating historical data sets
/// against the rules as they stood on a given day.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
