use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "artsearch",
    version,
    about = "Search the Rijksmuseum collection from your terminal"
)]
pub struct Cli {
    /// Config file (default: <config dir>/artsearch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API key; overrides ARTSEARCH_API_KEY and the config file
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the collection search endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Do not download thumbnails
    #[arg(long)]
    pub no_images: bool,

    /// Search term to submit right away
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and apply command-line overrides.
    ///
    /// An explicit `--config` path must exist; the default path may be absent.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config_path();
        if self.config.is_some() && !path.exists() {
            return Err(ConfigError::ReadError {
                path,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if self.no_images {
            config.ui.show_images = false;
        }
        config.validate()
    }
}
