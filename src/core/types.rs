use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crate::error::AppError;

/// Canonical display form of a name: trimmed, first letter upper case, rest lower case.
///
/// `"  aRGIOPE "` becomes `"Argiope"`. Both user entries and upstream names go
/// through this, so membership checks are effectively case-insensitive.
pub(crate) fn canonicalize(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A spider family (or any other grouping) chosen for a round
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Category(String);

impl Category {
    /// Normalize user input into a category.
    ///
    /// Only ASCII letters are accepted: the name ends up in a URL pattern and
    /// in a record file name.
    pub(crate) fn parse(raw: &str) -> Result<Self, AppError> {
        let name = canonicalize(raw);
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::InvalidCategory {
                input: raw.trim().to_string(),
            });
        }
        Ok(Self(name))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Valid names for one category, fixed for the duration of a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AnswerSet {
    names: HashSet<String>,
}

impl AnswerSet {
    pub(crate) fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| canonicalize(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Membership test for an already canonicalized name
    pub(crate) fn contains(&self, canonical: &str) -> bool {
        self.names.contains(canonical)
    }

    /// Number of distinct known names, the denominator for percentages
    pub(crate) fn total_known(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Final statistics of a finished round
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RoundSummary {
    pub(crate) category: Category,
    /// Accepted entries in the order they were given
    pub(crate) accepted: Vec<String>,
    pub(crate) total_known: usize,
    pub(crate) percentage: f64,
    /// Time since the round began
    pub(crate) elapsed_total: Duration,
    /// Time since the last accepted entry (or round start)
    pub(crate) since_last_valid: Duration,
    pub(crate) previous_best: u32,
}

impl RoundSummary {
    pub(crate) fn total(&self) -> u32 {
        u32::try_from(self.accepted.len()).unwrap_or(u32::MAX)
    }

    pub(crate) fn is_new_best(&self) -> bool {
        self.total() > self.previous_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_capitalizes_first_letter_only() {
        assert_eq!(canonicalize("argiope"), "Argiope");
        assert_eq!(canonicalize("ARGIOPE"), "Argiope");
        assert_eq!(canonicalize("aRgIoPe"), "Argiope");
    }

    #[test]
    fn canonicalize_trims_whitespace() {
        assert_eq!(canonicalize("  latrodectus\t"), "Latrodectus");
        assert_eq!(canonicalize("   "), "");
    }

    #[test]
    fn category_parse_normalizes() {
        let c = Category::parse("araneidae").unwrap();
        assert_eq!(c.as_str(), "Araneidae");
        assert_eq!(c.to_string(), "Araneidae");
        assert_eq!(c, Category::parse("  ARANEIDAE ").unwrap());
    }

    #[test]
    fn category_parse_rejects_empty_and_non_letters() {
        assert!(matches!(
            Category::parse(""),
            Err(AppError::InvalidCategory { .. })
        ));
        assert!(matches!(
            Category::parse("../etc"),
            Err(AppError::InvalidCategory { .. })
        ));
        assert!(matches!(
            Category::parse("Aran eidae"),
            Err(AppError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn answer_set_normalizes_and_dedups() {
        let set = AnswerSet::new(["Argiope", "argiope", "ARANEUS", ""]);
        assert_eq!(set.total_known(), 2);
        assert!(set.contains("Argiope"));
        assert!(set.contains("Araneus"));
        assert!(!set.contains("argiope"));
        assert_eq!(set.sorted_names(), vec!["Araneus", "Argiope"]);
    }

    #[test]
    fn summary_new_best_is_strictly_greater() {
        let summary = RoundSummary {
            category: Category::parse("Theridiidae").unwrap(),
            accepted: vec!["Latrodectus".to_string(), "Steatoda".to_string()],
            total_known: 10,
            percentage: 20.0,
            elapsed_total: Duration::from_secs(15),
            since_last_valid: Duration::from_secs(11),
            previous_best: 2,
        };
        assert_eq!(summary.total(), 2);
        assert!(!summary.is_new_best());

        let better = RoundSummary {
            previous_best: 1,
            ..summary
        };
        assert!(better.is_new_best());
    }
}
