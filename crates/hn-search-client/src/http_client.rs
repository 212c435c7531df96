//! Reqwest-based search API client
//!
//! Direct implementation of the `SearchClient` trait against the Algolia
//! HTTP endpoint. One GET per call, no caching.

use crate::client::{SearchClient, SearchError};
use crate::types::{SearchResponse, StoryDto};
use async_trait::async_trait;
use log::debug;

/// Direct HTTP client for the story search endpoint
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    http: reqwest::Client,
    endpoint: String,
    hits_per_page: u32,
}

impl HttpSearchClient {
    /// Create a new client against the given endpoint
    ///
    /// `hits_per_page` bounds the result list server-side.
    pub fn new(endpoint: impl Into<String>, hits_per_page: u32) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            hits_per_page,
        })
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search_stories(&self, query: &str) -> Result<Vec<StoryDto>, SearchError> {
        debug!("Searching stories for {:?}", query);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", query)])
            .query(&[("hitsPerPage", self.hits_per_page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        // Decode from the raw body rather than response.json() so a
        // malformed body surfaces as Decode, not as a transport error.
        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        debug!(
            "Search for {:?} returned {} of {} hits",
            query,
            parsed.hits.len(),
            parsed.nb_hits
        );
        Ok(parsed.hits)
    }
}
