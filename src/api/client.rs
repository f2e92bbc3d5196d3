use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::api::error::ApiError;
use crate::api::request::SearchRequest;
use crate::api::types::{ArtRecord, CollectionResponse};
use crate::config::ApiConfig;

/// Largest accepted search response body.
pub const MAX_SEARCH_BYTES: u64 = 16 * 1024 * 1024;
/// Largest accepted image download.
pub const MAX_IMAGE_BYTES: u64 = 8 * 1024 * 1024;

/// HTTP client for the collection search endpoint and its image URLs.
#[derive(Clone)]
pub struct CollectionClient {
    client: Client,
    request_timeout: Duration,
}

impl CollectionClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|source| ApiError::Connection { source })?;

        Ok(Self {
            client,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    /// Run one search and return the `artObjects` list verbatim.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<ArtRecord>, ApiError> {
        let url = request.url()?;
        tracing::debug!(search = %request.search, "Searching collection");

        let body = self.get_bytes(url, MAX_SEARCH_BYTES).await?;
        let response: CollectionResponse =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode { source })?;

        tracing::debug!(
            search = %request.search,
            count = response.art_objects.len(),
            "Search completed"
        );
        Ok(response.art_objects)
    }

    /// Download raw image bytes from a record's `webImage.url`.
    ///
    /// Bodies over `MAX_IMAGE_BYTES` are rejected without being buffered whole.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let url = reqwest::Url::parse(url).map_err(|e| ApiError::InvalidEndpoint {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        self.get_bytes(url, MAX_IMAGE_BYTES).await
    }

    async fn get_bytes(&self, url: reqwest::Url, max_bytes: u64) -> Result<Vec<u8>, ApiError> {
        let result = timeout(self.request_timeout, self.do_get(url, max_bytes)).await;

        match result {
            Ok(response) => response,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_get(&self, url: reqwest::Url, max_bytes: u64) -> Result<Vec<u8>, ApiError> {
        let mut response = self.client.get(url).send().await.map_err(|source| {
            if source.is_timeout() {
                ApiError::Timeout {
                    duration: self.request_timeout.as_secs(),
                }
            } else {
                ApiError::Connection { source }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        if response.content_length().is_some_and(|len| len > max_bytes) {
            return Err(ApiError::TooLarge { limit: max_bytes });
        }

        // Content-Length may be absent, so the limit is enforced while reading
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|source| ApiError::Body { source })?
        {
            if body.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(ApiError::TooLarge { limit: max_bytes });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}
