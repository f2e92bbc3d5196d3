//! Credential resolution for the collection API.
//!
//! The access key never lives in code. It is resolved at startup from, in
//! order: the `--api-key` flag, the `ARTSEARCH_API_KEY` environment variable,
//! then `api.api_key` in the config file.

use super::types::ApiConfig;

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "ARTSEARCH_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Cli,
    Environment,
    ConfigFile,
}

/// Outcome of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured {
        key: SecureString,
        source: CredentialSource,
    },
    Unconfigured,
}

impl ApiConfig {
    /// Resolve the API key using the process environment.
    pub fn resolve_credential(&self, cli_key: Option<&str>) -> CredentialStatus {
        let env_key = std::env::var(API_KEY_ENV_VAR).ok();
        self.resolve_credential_with(cli_key, env_key.as_deref())
    }

    /// Resolve the API key from explicit inputs. Empty values are skipped.
    pub fn resolve_credential_with(
        &self,
        cli_key: Option<&str>,
        env_key: Option<&str>,
    ) -> CredentialStatus {
        let candidates = [
            (cli_key, CredentialSource::Cli),
            (env_key, CredentialSource::Environment),
            (self.api_key.as_deref(), CredentialSource::ConfigFile),
        ];

        for (value, source) in candidates {
            if let Some(key) = value.filter(|k| !k.is_empty()) {
                return CredentialStatus::Configured {
                    key: SecureString::new(key.to_string()),
                    source,
                };
            }
        }

        CredentialStatus::Unconfigured
    }
}
