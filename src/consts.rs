use std::time::Duration;

/// Seconds allowed between two valid entries
pub(crate) const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Width of dividers and boxed headers
pub(crate) const DEFAULT_WIDTH: usize = 100;

pub(crate) const TITLE: &str = "SPIDER GENUS NAMING CHALLENGE";

pub(crate) const SUMMARY: &str = "\
This is a simple game where you name as many genera from a spider family as you can.
Once you select a family, you will be prompted to submit genus names one at a time.
The taxon names don't need to be case-sensitive.
If you go {interval} seconds without entering another valid genus name, the game ends!";

/// World Spider Catalog listing of all families
pub(crate) const WSC_FAMILIES_URL: &str = "https://wsc.nmbe.ch/families";

/// Prefix for per-family genus listings; the family link is appended
pub(crate) const WSC_GENLIST_URL: &str = "https://wsc.nmbe.ch/genlist";

/// Application name used for config, cache and data directories
pub(crate) const APP_NAME: &str = "genusrush";
