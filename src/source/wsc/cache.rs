use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::consts::APP_NAME;
use crate::core::{AnswerSet, Category};

#[derive(Debug, Serialize, Deserialize)]
struct CachedGenera {
    family: String,
    genera: Vec<String>,
}

/// `~/.cache/genusrush`
pub(super) fn default_cache_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".cache").join(APP_NAME))
}

fn cache_path(dir: &Path, category: &Category) -> PathBuf {
    dir.join(format!("{}.json", category.as_str()))
}

pub(super) fn load(dir: &Path, category: &Category) -> Option<AnswerSet> {
    let file = File::open(cache_path(dir, category)).ok()?;
    let cached: CachedGenera = serde_json::from_reader(file).ok()?;
    if cached.family != category.as_str() || cached.genera.is_empty() {
        return None;
    }
    Some(AnswerSet::new(cached.genera))
}

pub(super) fn load_if_fresh(
    dir: &Path,
    category: &Category,
    ttl: Duration,
) -> Option<(AnswerSet, Duration)> {
    let meta = std::fs::metadata(cache_path(dir, category)).ok()?;
    let modified = meta.modified().ok()?;
    let age = SystemTime::now().duration_since(modified).ok()?;
    if age > ttl {
        return None;
    }
    Some((load(dir, category)?, age))
}

pub(super) fn save(dir: &Path, category: &Category, answers: &AnswerSet) {
    let _ = std::fs::create_dir_all(dir);
    let cached = CachedGenera {
        family: category.as_str().to_string(),
        genera: answers.sorted_names().into_iter().map(String::from).collect(),
    };
    if let Ok(mut file) = File::create(cache_path(dir, category)) {
        let _ = serde_json::to_writer(&mut file, &cached);
    }
}

/// Families with a cache entry, sorted
pub(super) fn cached_families(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut families: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension()? != "json" {
                return None;
            }
            Some(path.file_stem()?.to_str()?.to_string())
        })
        .collect();
    families.sort();
    families
}
