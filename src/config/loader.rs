use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest accepted thumbnail edge, in cells.
pub const MAX_THUMBNAIL_CELLS: u16 = 64;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/artsearch/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current directory
    /// if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("artsearch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file is parsed as
    /// TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an http(s) URL
    /// - `api.timeout_seconds` and `api.connect_timeout_seconds` are non-zero
    /// - thumbnail dimensions are within 1..=64 cells
    pub fn validate(&self) -> Result<(), ConfigError> {
        match reqwest::Url::parse(&self.api.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::ValidationError {
                    message: format!("api.base_url must use http or https, got '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::ValidationError {
                    message: format!("api.base_url '{}' is not a valid URL: {}", self.api.base_url, e),
                });
            }
        }

        for (name, value) in [
            ("api.timeout_seconds", self.api.timeout_seconds),
            ("api.connect_timeout_seconds", self.api.connect_timeout_seconds),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than 0", name),
                });
            }
        }

        for (name, value) in [
            ("ui.thumbnail_width", self.ui.thumbnail_width),
            ("ui.thumbnail_height", self.ui.thumbnail_height),
        ] {
            if value == 0 || value > MAX_THUMBNAIL_CELLS {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "{} must be between 1 and {}, got {}",
                        name, MAX_THUMBNAIL_CELLS, value
                    ),
                });
            }
        }

        Ok(())
    }
}
