//! Configuration file handling for glyphgrid.
//!
//! Loads render options from `~/.config/glyphgrid/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{BrightnessModel, RenderOptions};

/// Configuration file structure for glyphgrid.
/// Loaded from ~/.config/glyphgrid/config.toml (or a caller-supplied path).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// The `[render]` table: file-level render option state.
#[derive(Debug, Deserialize, Default)]
pub struct RenderConfig {
    /// Brightness model name: "average", "luminosity" or "lightness".
    #[serde(default)]
    pub brightness: Option<String>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub colorize: bool,
}

impl RenderConfig {
    /// Resolve the file-level settings into options for a render pass.
    ///
    /// An unrecognized brightness name falls back to `Average` rather than
    /// failing: rendering degrades gracefully on a cosmetic setting.
    pub fn to_options(&self) -> RenderOptions {
        let model = match self.brightness.as_deref() {
            None => BrightnessModel::default(),
            Some(name) => BrightnessModel::from_name(name).unwrap_or_else(|| {
                log::warn!(
                    "unknown brightness model '{}', falling back to '{}'",
                    name,
                    BrightnessModel::Average.name()
                );
                BrightnessModel::Average
            }),
        };

        RenderOptions {
            model,
            invert: self.invert,
            colorize: self.colorize,
        }
    }
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
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphgrid/config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphgrid/config.toml")
        })
}
