//! Regex scraping of WSC listing pages
//!
//! Family rows link to their genus list as `/<id>/<Family>">Genera<`, and
//! genus rows link to their catalog entry as `<id>/<Genus>">Catalog<`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Category;
use crate::error::AppError;

static FAMILY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/[0-9]+/([A-Za-z]+)">Genera<"#).expect("family row pattern")
});

static GENUS_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[0-9]+/([A-Za-z]+)">Catalog<"#).expect("genus row pattern")
});

/// Path of the genus listing for `category`, e.g. `/12/Araneidae`
pub(super) fn find_family_link(html: &str, category: &Category) -> Result<Option<String>, AppError> {
    let pattern = format!(
        r#"(/[0-9]+/{})">Genera<"#,
        regex::escape(category.as_str())
    );
    let re = Regex::new(&pattern)?;
    Ok(re
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}

/// All family names on the families page, sorted and deduplicated
pub(super) fn parse_families(html: &str) -> Vec<String> {
    let mut families: Vec<String> = FAMILY_ROW
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    families.sort();
    families.dedup();
    families
}

/// Genus names on a family's genus listing, in page order
pub(super) fn parse_genera(html: &str) -> Vec<String> {
    GENUS_ROW
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
