//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Play rounds until you quit (default)
    Play {
        /// Spider family for the first round (skips the family prompt)
        #[arg(short, long, value_name = "FAMILY")]
        category: Option<String>,
    },
    /// Show personal records for every family played
    Records,
    /// List spider families known to the catalog
    Families,
}
