//! Core module - round timing, validation and scoring

mod round;
mod timer;
mod types;

pub(crate) use round::{EntryOutcome, RoundController, RoundState};
pub(crate) use timer::RoundTimer;
pub(crate) use types::{AnswerSet, Category, RoundSummary};
