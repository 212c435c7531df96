//! Search client trait and error definitions
//!
//! This module defines the core `SearchClient` trait that all client
//! implementations must satisfy, and the error type they report.

use crate::types::StoryDto;
use async_trait::async_trait;

/// Errors a search request can fail with
///
/// The application collapses all of these into a single failure state;
/// the distinction exists for logging and for tests.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// Response body did not decode as a search response
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Search API client trait
///
/// Defines the interface for querying the story search endpoint.
/// Implementations can be direct (hitting the API) or test doubles.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search stories matching a query
    ///
    /// Issues exactly one request; no retries, no caching. The returned
    /// records are in server ranking order.
    async fn search_stories(&self, query: &str) -> Result<Vec<StoryDto>, SearchError>;
}
