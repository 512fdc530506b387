//! Configuration file handling for gif-ascii.
//!
//! Loads configuration from `~/.config/gif-ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::DetailTier;

/// Default config file written by `gif-ascii config init`.
pub const DEFAULT_CONFIG: &str = r#"# gif-ascii configuration

[render]
# Detail tier: standard, high-resolution, ultra-hd
tier = "standard"

[player]
# Redraw frames in place instead of scrolling
clear_screen = true
# Number of times to play the animation (0 = forever)
loops = 0
"#;

/// Configuration file structure for gif-ascii.
/// Loaded from ~/.config/gif-ascii/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct RenderConfig {
    #[serde(default)]
    pub tier: Option<String>,
}

impl RenderConfig {
    /// Configured tier, or standard when unset or unrecognized.
    pub fn tier(&self) -> DetailTier {
        self.tier
            .as_deref()
            .map(DetailTier::from_label)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    #[serde(default)]
    pub loops: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            loops: 0,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("gif-ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/gif-ascii/config.toml")
        })
}
