use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::APP_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) interval: Option<u64>,
    #[serde(default)]
    pub(crate) width: Option<usize>,
    #[serde(default)]
    pub(crate) records_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) cache_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) offline: bool,
    #[serde(default)]
    pub(crate) no_banner: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        if config.debug {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/genusrush/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/genusrush/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.genusrush.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}
