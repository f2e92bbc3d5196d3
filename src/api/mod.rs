//! Client for the Rijksmuseum collection search API.

mod client;
mod error;
mod request;
mod types;

pub use client::{CollectionClient, MAX_IMAGE_BYTES, MAX_SEARCH_BYTES};
pub use error::ApiError;
pub use request::SearchRequest;
pub use types::{ArtRecord, CollectionResponse, WebImage};

/// Public collection search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.rijksmuseum.nl/api/en/collection";
