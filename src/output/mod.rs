mod banner;
mod format;
mod records;
mod summary;

pub(crate) use banner::{divider, header};
pub(crate) use records::records_table;
pub(crate) use summary::{RoundEnd, entry_feedback, entry_prompt, round_report};
