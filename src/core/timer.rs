//! Rolling countdown between valid entries
//!
//! The timer holds no clock of its own. Every query takes the reference
//! instant (last accepted entry or round start) and the current instant, so
//! asking twice never changes anything.

use std::time::{Duration, Instant};

use crate::consts::DEFAULT_INTERVAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RoundTimer {
    interval: Duration,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl RoundTimer {
    pub(crate) fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Time since `reference`, zero if `now` is earlier
    pub(crate) fn elapsed(&self, reference: Instant, now: Instant) -> Duration {
        now.saturating_duration_since(reference)
    }

    /// Expired only once the elapsed time strictly exceeds the interval
    pub(crate) fn is_expired(&self, reference: Instant, now: Instant) -> bool {
        self.elapsed(reference, now) > self.interval
    }

    /// Whole seconds left, rounded to nearest; `None` once expired
    pub(crate) fn remaining_secs(&self, reference: Instant, now: Instant) -> Option<u64> {
        if self.is_expired(reference, now) {
            return None;
        }
        let left = self.interval.saturating_sub(self.elapsed(reference, now));
        Some(left.as_secs_f64().round() as u64)
    }
}
