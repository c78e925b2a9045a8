//! One text file per category: `pb_for_<Category>.txt`
//!
//! Each line holds an integer; the last non-blank line is the current best.
//! Older lines are kept as history.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::consts::APP_NAME;
use crate::core::Category;
use crate::error::AppError;
use crate::utils::debug_enabled;

use super::RecordStore;

const FILE_PREFIX: &str = "pb_for_";
const FILE_SUFFIX: &str = ".txt";

/// A stored best score, as listed by [`FileRecordStore::list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PersonalRecord {
    pub(crate) category: String,
    pub(crate) best: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `~/.local/share/genusrush` or the platform equivalent, else the working directory
    pub(crate) fn default_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn path_for(&self, category: &Category) -> PathBuf {
        self.dir
            .join(format!("{FILE_PREFIX}{}{FILE_SUFFIX}", category.as_str()))
    }

    /// All stored bests, sorted by category name
    pub(crate) fn list(&self) -> Result<Vec<PersonalRecord>, AppError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/{FILE_PREFIX}*{FILE_SUFFIX}",
            glob::Pattern::escape(&self.dir.to_string_lossy())
        );
        let paths = glob::glob(&pattern).map_err(|e| AppError::RecordList {
            dir: self.dir.clone(),
            reason: e.to_string(),
        })?;

        let mut records: Vec<PersonalRecord> = paths
            .filter_map(Result::ok)
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                let category = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
                if category.is_empty() {
                    return None;
                }
                Some(PersonalRecord {
                    category: category.to_string(),
                    best: read_best(&path).unwrap_or(0),
                })
            })
            .collect();
        records.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(records)
    }
}

/// Last non-blank line of a record file, if it parses
fn read_best(path: &Path) -> Option<u32> {
    let content = fs::read_to_string(path).ok()?;
    content
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())?
        .trim()
        .parse()
        .ok()
}

impl RecordStore for FileRecordStore {
    fn get(&self, category: &Category) -> u32 {
        let path = self.path_for(category);

        if !path.exists() {
            // An unwritable directory only means there is no record yet
            let created = fs::create_dir_all(&self.dir).and_then(|_| File::create(&path));
            if debug_enabled() {
                match created {
                    Ok(_) => eprintln!("[debug] created {}", path.display()),
                    Err(e) => eprintln!("[debug] could not create {}: {e}", path.display()),
                }
            }
            return 0;
        }

        match read_best(&path) {
            Some(best) => best,
            None => {
                if debug_enabled() {
                    eprintln!("[debug] no usable record in {}, using 0", path.display());
                }
                0
            }
        }
    }

    fn append(&self, category: &Category, score: u32) -> Result<(), AppError> {
        let path = self.path_for(category);
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            writeln!(file, "{score}")
        };
        write().map_err(|source| AppError::RecordWrite {
            path: path.clone(),
            source,
        })
    }
}
