//! Per-entry feedback and end-of-round text

use crate::core::{Category, EntryOutcome, RoundSummary};

use super::format::{format_secs, taxon_word};

/// Why a round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundEnd {
    TimeUp,
    InputClosed,
}

/// Prompt for the next entry
pub(crate) fn entry_prompt(seconds_left: u64) -> String {
    format!("Enter a genus within {seconds_left} seconds: ")
}

/// Message for a rejected entry; accepted entries and timeouts print nothing
pub(crate) fn entry_feedback(outcome: &EntryOutcome, category: &Category) -> Option<String> {
    match outcome {
        EntryOutcome::NotFound { .. } => Some(format!(
            "*** Not a genus in {category} - check your spelling? ***\n"
        )),
        EntryOutcome::Duplicate { position, .. } => {
            Some(format!("*** Already listed - entry number {position} ***\n"))
        }
        EntryOutcome::Accepted { .. } | EntryOutcome::RoundOver => None,
    }
}

/// Game-over report, ending with the personal best line
pub(crate) fn round_report(summary: &RoundSummary, end: RoundEnd) -> String {
    let total = summary.total();
    let mut out = String::from("\n*** GAME OVER! ");
    match end {
        RoundEnd::TimeUp => {
            out.push_str("Time's up. ");
            if total > 0 {
                out.push_str(&format!(
                    "{} seconds elapsed since last valid entry. ",
                    format_secs(summary.since_last_valid)
                ));
            }
        }
        RoundEnd::InputClosed => out.push_str("Input closed. "),
    }
    out.push_str("***\n\n");

    out.push_str(&format!(
        "You named a total of {total} {} in {} seconds, or {:.2}% of the {} known genera for {}.\n",
        taxon_word(total),
        format_secs(summary.elapsed_total),
        summary.percentage,
        summary.total_known,
        summary.category,
    ));
    out.push_str(&format!(
        "Your previous record for this family was {}.",
        summary.previous_best
    ));
    if summary.is_new_best() {
        out.push_str(".. congratulations on setting a new personal best!");
    }
    out
}
