//! Answer source abstraction layer
//!
//! A provider turns a category into the set of names that count as correct
//! answers. The round logic only consumes the returned set.

pub(crate) mod wsc;

use crate::core::{AnswerSet, Category};
use crate::error::AppError;

/// Supplies the valid names for a category
pub(crate) trait AnswerSetProvider {
    /// Display name for status lines
    fn display_name(&self) -> &'static str;

    /// Fetch the answer set, failing with `CategoryNotFound` when the
    /// category has no upstream matches
    fn fetch(&self, category: &Category) -> Result<AnswerSet, AppError>;
}

pub(crate) use wsc::{CatalogOptions, WscCatalog};
