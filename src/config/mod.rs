//! Configuration loading and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialSource, CredentialStatus, SecureString, API_KEY_ENV_VAR};
pub use loader::{ConfigError, MAX_THUMBNAIL_CELLS};
pub use types::{ApiConfig, Config, UiConfig};
