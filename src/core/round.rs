//! Round state machine
//!
//! A round stays in `AwaitingEntry` until the rolling timer runs out. Only a
//! valid, new entry restarts the countdown; misses and repeats burn time.

use std::time::Instant;

use crate::core::timer::RoundTimer;
use crate::core::types::{AnswerSet, Category, RoundSummary, canonicalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundState {
    AwaitingEntry,
    RoundOver,
}

/// Result of submitting one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryOutcome {
    /// New valid name; `position` is 1-indexed
    Accepted { entry: String, position: usize },
    /// Not a member of the answer set
    NotFound { entry: String },
    /// Already accepted earlier at `position` (1-indexed)
    Duplicate { entry: String, position: usize },
    /// The timer had run out before the entry arrived; it was not scored
    RoundOver,
}

/// Mutable per-round context
#[derive(Debug, Clone)]
struct Round {
    category: Category,
    accepted: Vec<String>,
    /// Last accepted entry, or round start
    round_start: Instant,
    session_start: Instant,
    /// Snapshot taken at round start
    previous_best: u32,
}

/// Drives one round against a fixed answer set
#[derive(Debug)]
pub(crate) struct RoundController<'a> {
    answers: &'a AnswerSet,
    timer: RoundTimer,
    round: Round,
    state: RoundState,
}

impl<'a> RoundController<'a> {
    pub(crate) fn new(
        category: Category,
        answers: &'a AnswerSet,
        previous_best: u32,
        timer: RoundTimer,
        now: Instant,
    ) -> Self {
        Self {
            answers,
            timer,
            round: Round {
                category,
                accepted: Vec::new(),
                round_start: now,
                session_start: now,
                previous_best,
            },
            state: RoundState::AwaitingEntry,
        }
    }

    pub(crate) fn category(&self) -> &Category {
        &self.round.category
    }

    /// Move to `RoundOver` if the timer has run out
    pub(crate) fn poll(&mut self, now: Instant) -> RoundState {
        if self.timer.is_expired(self.round.round_start, now) {
            self.state = RoundState::RoundOver;
        }
        self.state
    }

    /// Whole seconds left before expiry; `None` once the round is over
    pub(crate) fn time_remaining(&self, now: Instant) -> Option<u64> {
        if self.state == RoundState::RoundOver {
            return None;
        }
        self.timer.remaining_secs(self.round.round_start, now)
    }

    pub(crate) fn submit(&mut self, raw: &str, now: Instant) -> EntryOutcome {
        let entry = canonicalize(raw);

        if self.poll(now) == RoundState::RoundOver {
            return EntryOutcome::RoundOver;
        }

        if !self.answers.contains(&entry) {
            return EntryOutcome::NotFound { entry };
        }

        if let Some(index) = self.round.accepted.iter().position(|a| *a == entry) {
            return EntryOutcome::Duplicate {
                entry,
                position: index + 1,
            };
        }

        self.round.accepted.push(entry.clone());
        self.round.round_start = self.round.round_start.max(now);
        EntryOutcome::Accepted {
            entry,
            position: self.round.accepted.len(),
        }
    }

    /// End the round and compute its statistics
    pub(crate) fn finish(self, now: Instant) -> RoundSummary {
        let total_known = self.answers.total_known();
        let percentage = if total_known == 0 {
            0.0
        } else {
            self.round.accepted.len() as f64 / total_known as f64 * 100.0
        };

        RoundSummary {
            since_last_valid: self.timer.elapsed(self.round.round_start, now),
            elapsed_total: self.timer.elapsed(self.round.session_start, now),
            category: self.round.category,
            accepted: self.round.accepted,
            total_known,
            percentage,
            previous_best: self.round.previous_best,
        }
    }
}
