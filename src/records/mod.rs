//! Personal best persistence
//!
//! The round driver reads the previous best once when a round starts and
//! appends a new best at most once when it ends.

mod file;

pub(crate) use file::{FileRecordStore, PersonalRecord};

use crate::core::Category;
use crate::error::AppError;

/// Storage for one best score per category
pub(crate) trait RecordStore {
    /// Current best for `category`, 0 when there is none
    fn get(&self, category: &Category) -> u32;

    /// Record a new best for `category`
    fn append(&self, category: &Category, score: u32) -> Result<(), AppError>;
}
