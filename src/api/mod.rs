/// Art Institute of Chicago API access
///
/// This module handles:
/// - Parsing catalog responses into typed records (catalog.rs)
/// - Building IIIF image URLs (catalog.rs)
/// - Fetching metadata and images, submitting ratings (client.rs)

pub mod catalog;
pub mod client;

pub use client::ArtClient;

use thiserror::Error;

/// Failure of a single API request
///
/// Kept `Clone` so results can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("server responded with status {0}")]
    Status(u16),
    /// Body did not have the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}
