//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{DEFAULT_INTERVAL, DEFAULT_WIDTH};
use crate::error::AppError;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "genusrush")]
#[command(
    about = "Name as many spider genera as you can before the clock runs out",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Seconds allowed between valid entries (default 10)
    #[arg(short, long, global = true, value_name = "SECS")]
    pub(crate) interval: Option<u64>,

    /// Directory holding the pb_for_<Family>.txt record files
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) records_dir: Option<PathBuf>,

    /// Directory for cached genus lists
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) cache_dir: Option<PathBuf>,

    /// Use cached genus lists only (skip fetching from the World Spider Catalog)
    #[arg(short = 'O', long, global = true)]
    pub(crate) offline: bool,

    /// Skip the title banner and rules
    #[arg(long, global = true)]
    pub(crate) no_banner: bool,

    /// Width of dividers and the title box
    #[arg(short, long, global = true, value_name = "COLUMNS")]
    pub(crate) width: Option<usize>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (fetches, cache hits, record files)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.offline && config.offline {
            self.offline = true;
        }
        if !self.no_banner && config.no_banner {
            self.no_banner = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Only override color if CLI is at default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Value options: only apply if CLI didn't set them
        if self.interval.is_none() {
            self.interval = config.interval;
        }
        if self.width.is_none() {
            self.width = config.width;
        }
        if self.records_dir.is_none() {
            self.records_dir = config.records_dir.clone();
        }
        if self.cache_dir.is_none() {
            self.cache_dir = config.cache_dir.clone();
        }

        self
    }

    pub(crate) fn interval(&self) -> Result<Duration, AppError> {
        match self.interval {
            None => Ok(DEFAULT_INTERVAL),
            Some(0) => Err(AppError::InvalidInterval { input: 0 }),
            Some(secs) => Ok(Duration::from_secs(secs)),
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
