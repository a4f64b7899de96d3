//! Configuration file loading for the rotating penalty landscape.
//!
//! ```toml
//! [landscape]
//! number_steps = 24
//! max_required_step = 1.0
//! safe_zone = 0.1
//!
//! [control]
//! start_position = 0.0
//! ```
//!
//! The `[landscape]` table deserializes straight into the validated
//! [`LandscapeParams`], so an invalid step count or safe zone is a parse
//! error at the file boundary.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use landscape_types::LandscapeParams;
use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Overrides the default config location when set and non-empty.
pub const CONFIG_PATH_ENV: &str = "LANDSCAPE_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct LandscapeConfig {
    pub landscape: Option<LandscapeParams>,
    #[serde(default)]
    pub control: ControlConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ControlConfig {
    /// Absolute control position a fresh landscape starts from.
    #[serde(default)]
    pub start_position: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse { path: PathBuf, source: TomlError },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl LandscapeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, TomlError> {
        toml::from_str(content)
    }

    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_PATH_ENV)
        && !raw.trim().is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    dirs::home_dir().map(|home| home.join(".landscape").join("config.toml"))
}
