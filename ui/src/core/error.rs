//! Error types for listing validation and catalog loading.

use thiserror::Error;

/// A shoe record that cannot be turned into a [`ShoeListing`](super::listing::ShoeListing).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("listing has an empty slug")]
    EmptySlug,
    #[error("slug `{0}` may only contain lowercase letters, digits, `-` and `_`")]
    InvalidSlug(String),
    #[error("{field} of `{slug}` must be a whole, non-negative amount of minor units (got {value})")]
    InvalidPrice {
        slug: String,
        field: &'static str,
        value: f64,
    },
    #[error("color count of `{slug}` must be non-negative (got {value})")]
    InvalidColorCount { slug: String, value: i64 },
    #[error("release date `{raw}` of `{slug}` is not a recognised date")]
    InvalidReleaseDate { slug: String, raw: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidListing(#[from] InvalidInput),
    #[error("slug `{0}` appears more than once in the catalog")]
    DuplicateSlug(String),
}
