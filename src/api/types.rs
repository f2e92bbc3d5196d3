//! Wire types for the collection search endpoint.

use serde::{Deserialize, Serialize};

/// Image attached to a collection item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebImage {
    pub url: String,
}

/// One museum-collection item as returned by the search endpoint.
///
/// Only the fields the UI renders are kept. Display strings default to empty
/// when the API leaves them out, so a sparse record still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub principal_or_first_maker: String,
    #[serde(default)]
    pub web_image: Option<WebImage>,
    /// Filter predicate for the results list.
    #[serde(default)]
    pub has_image: bool,
}

impl ArtRecord {
    pub fn image_url(&self) -> Option<&str> {
        self.web_image
            .as_ref()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Response body of the collection search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    #[serde(default)]
    pub art_objects: Vec<ArtRecord>,
}
