use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Family name not found: {category}")]
    CategoryNotFound { category: String },

    #[error("Invalid family name: \"{input}\"")]
    InvalidCategory { input: String },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("No cached genus list for {category} (offline mode)")]
    NotCached { category: String },

    #[error("Invalid listing pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to write record file {}: {source}", path.display())]
    RecordWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read records in {}: {reason}", dir.display())]
    RecordList { dir: PathBuf, reason: String },

    #[error("Interval must be at least 1 second (got {input})")]
    InvalidInterval { input: u64 },

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
