use metrics::{counter, Counter};

/// Decode counters for a single codec handle. Handles created before a
/// metrics recorder is installed keep the no-op counters they were
/// built with.
pub(crate) struct DecodeStats {
    pub attempts: Counter,
    pub accepted: Counter,
    pub rejected: Counter,
}

impl DecodeStats {
    pub fn new() -> Self {
        Self {
            attempts: counter!("cnp.decode.attempts"),
            accepted: counter!("cnp.decode.accepted"),
            rejected: counter!("cnp.decode.rejected"),
        }
    }

    pub fn record_outcome(&self, accepted: bool) {
        self.attempts.increment(1);
        if accepted {
            self.accepted.increment(1);
        } else {
            self.rejected.increment(1);
        }
    }
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}
