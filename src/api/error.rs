//! Error types for collection requests and thumbnail downloads.

use thiserror::Error;

/// Errors that can occur while talking to the collection API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential was resolved from CLI, environment, or config
    #[error("No API key configured")]
    MissingCredential,

    /// Endpoint or image URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Failed to reach the server
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status
    #[error("Unexpected status {status}")]
    Status { status: u16 },

    /// Failed to read the response body
    #[error("Failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON
    #[error("Malformed response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Response body was larger than allowed
    #[error("Response exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    /// Background decode task panicked or was cancelled
    #[error("Decode task failed: {reason}")]
    TaskFailed { reason: String },

    /// Thumbnail bytes could not be decoded
    #[error("Image decode failed: {source}")]
    Image {
        #[from]
        source: image::ImageError,
    },
}

impl ApiError {
    /// Short message for display on the results screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "No API key configured",
            ApiError::InvalidEndpoint { .. } => "Search endpoint is misconfigured",
            ApiError::Connection { .. } => "Could not reach the collection server",
            ApiError::Timeout { .. } => "The search timed out",
            ApiError::Status { status } if *status == 401 || *status == 403 => {
                "The API key was rejected"
            }
            ApiError::Status { .. } => "The collection server returned an error",
            ApiError::Body { .. } | ApiError::Decode { .. } => {
                "The collection server sent an unreadable response"
            }
            ApiError::TooLarge { .. } => "The response was too large",
            ApiError::TaskFailed { .. } | ApiError::Image { .. } => "Image could not be decoded",
        }
    }

    /// Technical details for the log file.
    pub fn details(&self) -> String {
        self.to_string()
    }
}
