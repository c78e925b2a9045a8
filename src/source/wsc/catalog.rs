//! WSC implementation of the `AnswerSetProvider` trait

use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{WSC_FAMILIES_URL, WSC_GENLIST_URL};
use crate::core::{AnswerSet, Category};
use crate::error::AppError;
use crate::source::AnswerSetProvider;
use crate::utils::debug_enabled;

use super::cache;
use super::fetcher::Fetcher;
use super::parser::{find_family_link, parse_families, parse_genera};

const GENERA_CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Clone, Default)]
pub(crate) struct CatalogOptions {
    /// Only use cached genus lists
    pub(crate) offline: bool,
    /// Overrides `~/.cache/genusrush`
    pub(crate) cache_dir: Option<PathBuf>,
}

/// World Spider Catalog answer source
#[derive(Debug)]
pub(crate) struct WscCatalog {
    fetcher: Fetcher,
    offline: bool,
    cache_dir: Option<PathBuf>,
}

impl WscCatalog {
    pub(crate) fn new(options: CatalogOptions) -> Self {
        Self {
            fetcher: Fetcher::new(),
            offline: options.offline,
            cache_dir: options.cache_dir.or_else(cache::default_cache_dir),
        }
    }

    /// Every family name listed by the catalog (cached families when offline)
    pub(crate) fn families(&self) -> Result<Vec<String>, AppError> {
        if self.offline {
            return Ok(self
                .cache_dir
                .as_deref()
                .map(cache::cached_families)
                .unwrap_or_default());
        }
        let html = self.fetcher.get_text(WSC_FAMILIES_URL)?;
        Ok(parse_families(&html))
    }

    fn fetch_remote(&self, category: &Category) -> Result<AnswerSet, AppError> {
        let not_found = || AppError::CategoryNotFound {
            category: category.to_string(),
        };

        let families_html = self.fetcher.get_text(WSC_FAMILIES_URL)?;
        let link = find_family_link(&families_html, category)?.ok_or_else(not_found)?;

        let url = format!("{WSC_GENLIST_URL}{link}");
        let answers = AnswerSet::new(parse_genera(&self.fetcher.get_text(&url)?));
        if answers.is_empty() {
            return Err(not_found());
        }
        Ok(answers)
    }
}

impl AnswerSetProvider for WscCatalog {
    fn display_name(&self) -> &'static str {
        "World Spider Catalog"
    }

    fn fetch(&self, category: &Category) -> Result<AnswerSet, AppError> {
        let cache_dir = self.cache_dir.as_deref();

        if self.offline {
            return cache_dir
                .and_then(|dir| cache::load(dir, category))
                .ok_or_else(|| AppError::NotCached {
                    category: category.to_string(),
                });
        }

        if let Some((answers, age)) =
            cache_dir.and_then(|dir| cache::load_if_fresh(dir, category, GENERA_CACHE_TTL))
        {
            if debug_enabled() {
                eprintln!(
                    "[debug] using cached genera for {category} ({:.1}h old)",
                    age.as_secs_f64() / 3600.0
                );
            }
            return Ok(answers);
        }

        let remote = self.fetch_remote(category);
        if let (Ok(answers), Some(dir)) = (&remote, cache_dir) {
            cache::save(dir, category, answers);
        }
        resolve(remote, || cache_dir.and_then(|dir| cache::load(dir, category)))
    }
}

/// A failed download falls back to a stale cache entry; a missing family never does
fn resolve(
    remote: Result<AnswerSet, AppError>,
    stale: impl FnOnce() -> Option<AnswerSet>,
) -> Result<AnswerSet, AppError> {
    match remote {
        Ok(answers) => Ok(answers),
        Err(e @ AppError::CategoryNotFound { .. }) => Err(e),
        Err(e) => match stale() {
            Some(answers) => {
                eprintln!("Warning: {e}; using cached genus list");
                Ok(answers)
            }
            None => Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_catalog(dir: &std::path::Path) -> WscCatalog {
        WscCatalog::new(CatalogOptions {
            offline: true,
            cache_dir: Some(dir.to_path_buf()),
        })
    }

    #[test]
    fn offline_fetch_reads_cache() {
        let dir = tempfile::tempdir().unwrap();
        let category = Category::parse("Theridiidae").unwrap();
        let answers = AnswerSet::new(["Latrodectus", "Steatoda"]);
        cache::save(dir.path(), &category, &answers);

        let catalog = offline_catalog(dir.path());
        assert_eq!(catalog.fetch(&category).unwrap(), answers);
    }

    #[test]
    fn offline_fetch_without_cache_fails() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = offline_catalog(dir.path());
        let err = catalog
            .fetch(&Category::parse("Lycosidae").unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::NotCached { .. }));
    }

    #[test]
    fn fresh_cache_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let category = Category::parse("Araneidae").unwrap();
        let answers = AnswerSet::new(["Argiope"]);
        cache::save(dir.path(), &category, &answers);

        let catalog = WscCatalog::new(CatalogOptions {
            offline: false,
            cache_dir: Some(dir.path().to_path_buf()),
        });
        assert_eq!(catalog.fetch(&category).unwrap(), answers);
    }

    fn network_error() -> AppError {
        AppError::Fetch {
            url: "https://wsc.nmbe.ch/families".to_string(),
            source: Box::new(ureq::Error::Io(std::io::Error::other("connection refused"))),
        }
    }

    #[test]
    fn network_error_falls_back_to_stale_cache() {
        let stale = AnswerSet::new(["Argiope", "Araneus"]);
        let resolved = resolve(Err(network_error()), || Some(stale.clone())).unwrap();
        assert_eq!(resolved, stale);
    }

    #[test]
    fn network_error_without_cache_is_reported() {
        let err = resolve(Err(network_error()), || None).unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
    }

    #[test]
    fn missing_family_ignores_stale_cache() {
        let not_found = AppError::CategoryNotFound {
            category: "Araneidae".to_string(),
        };
        let err = resolve(Err(not_found), || Some(AnswerSet::new(["Argiope"]))).unwrap_err();
        assert!(matches!(err, AppError::CategoryNotFound { .. }));
    }

    #[test]
    fn remote_answers_win_over_cache() {
        let fresh = AnswerSet::new(["Cyclosa"]);
        let resolved = resolve(Ok(fresh.clone()), || Some(AnswerSet::new(["Argiope"]))).unwrap();
        assert_eq!(resolved, fresh);
    }

    #[test]
    fn offline_families_lists_cache() {
        let dir = tempfile::tempdir().unwrap();
        let category = Category::parse("Araneidae").unwrap();
        cache::save(dir.path(), &category, &AnswerSet::new(["Argiope"]));

        let catalog = offline_catalog(dir.path());
        assert_eq!(catalog.families().unwrap(), vec!["Araneidae"]);
        assert_eq!(catalog.display_name(), "World Spider Catalog");
    }
}
