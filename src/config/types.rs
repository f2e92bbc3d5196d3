use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ENDPOINT;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Collection API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint (e.g., "https://www.rijksmuseum.nl/api/en/collection").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Access key. `ARTSEARCH_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Download and draw thumbnails in list items.
    #[serde(default = "default_show_images")]
    pub show_images: bool,
    /// Thumbnail width in terminal cells.
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u16,
    /// Thumbnail height in terminal cells (two pixel rows per cell).
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: u16,
    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_show_images() -> bool {
    true
}

fn default_thumbnail_width() -> u16 {
    16
}

fn default_thumbnail_height() -> u16 {
    8
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_images: default_show_images(),
            thumbnail_width: default_thumbnail_width(),
            thumbnail_height: default_thumbnail_height(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
