//! Search API data transfer objects
//!
//! These types represent the data returned from the search endpoint.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use serde::{Deserialize, Serialize};

/// A single story record from the search API
///
/// The server is trusted to supply well-formed records; optional fields
/// that are absent or null (Ask HN posts have no url, dead posts may have
/// no points) fall back to defaults instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDto {
    /// Unique, stable record identifier
    #[serde(rename = "objectID")]
    pub id: String,

    /// Story title
    #[serde(default)]
    pub title: Option<String>,

    /// Link target (absent for self posts)
    #[serde(default)]
    pub url: Option<String>,

    /// Submitter's username
    #[serde(default)]
    pub author: String,

    /// Number of comments
    #[serde(default)]
    pub num_comments: Option<u64>,

    /// Upvote score
    #[serde(default)]
    pub points: Option<u64>,
}

/// Response body of a search request
///
/// Only the fields this application consumes are modeled; the endpoint
/// returns more (pagination, facets) which serde ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching records, in server ranking order
    pub hits: Vec<StoryDto>,

    /// Total number of matches on the server side
    #[serde(rename = "nbHits", default)]
    pub nb_hits: u64,
}
