use reqwest::Url;

use crate::api::error::ApiError;
use crate::config::SecureString;

/// One parameterized search against the collection endpoint.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub base_url: String,
    /// Search term exactly as entered.
    pub search: String,
    pub api_key: SecureString,
}

impl SearchRequest {
    pub fn new(base_url: impl Into<String>, search: impl Into<String>, api_key: SecureString) -> Self {
        Self {
            base_url: base_url.into(),
            search: search.into(),
            api_key,
        }
    }

    /// Build `{base_url}?q=..&key=..&format=json` with every value URL-encoded.
    pub fn url(&self) -> Result<Url, ApiError> {
        if self.api_key.expose().is_empty() {
            return Err(ApiError::MissingCredential);
        }
        Url::parse_with_params(
            &self.base_url,
            &[
                ("q", self.search.as_str()),
                ("key", self.api_key.expose()),
                ("format", "json"),
            ],
        )
        .map_err(|e| ApiError::InvalidEndpoint {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }
}
