//! User configuration (`config.toml`).
//!
//! ```toml
//! [display]
//! max_len = 10
//! max_result_len = 9
//! clear_on_result = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::calculator::{CalculatorOptions, MAX_LEN, MAX_NUM_LEN};

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}' in {path}: must be at least 1")]
    Invalid { path: PathBuf, field: &'static str },
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Display settings.
    #[serde(default)]
    pub display: DisplaySection,
}

/// The `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    /// Characters the user can type (default: 10).
    pub max_len: usize,

    /// Width quotients are rounded to (default: 9).
    pub max_result_len: usize,

    /// Start a new expression when typing after a numeric result
    /// (default: false).
    pub clear_on_result: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            max_len: MAX_LEN,
            max_result_len: MAX_NUM_LEN,
            clear_on_result: false,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/keypad-calc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keypad-calc").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// used if a file is there, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        debug!(path = %path.display(), "loading config");
        Self::from_str(&content, path)
    }

    /// Parse a configuration from a string.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.display.max_len == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_owned(),
                field: "display.max_len",
            });
        }
        if self.display.max_result_len == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_owned(),
                field: "display.max_result_len",
            });
        }
        Ok(())
    }

    /// Calculator options described by this configuration.
    pub fn calculator_options(&self) -> CalculatorOptions {
        CalculatorOptions {
            max_len: self.display.max_len,
            max_result_len: self.display.max_result_len,
            clear_on_result: self.display.clear_on_result,
        }
    }
}
