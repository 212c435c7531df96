//! Hacker News search API client
//!
//! This crate provides a trait-based client for the Algolia-backed Hacker
//! News search endpoint. The design keeps the trait seam separate from the
//! concrete HTTP implementation so consumers can substitute a mock for
//! testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          SearchClient trait          │
//! │  - search_stories(query)             │
//! └─────────────────────────────────────┘
//!                    │
//!                    ▼
//!         ┌─────────────────────┐
//!         │  HttpSearchClient   │
//!         │  (reqwest-backed)   │
//!         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hn_search_client::{HttpSearchClient, SearchClient, DEFAULT_ENDPOINT};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpSearchClient::new(DEFAULT_ENDPOINT, 20)?;
//! let hits = client.search_stories("rust").await?;
//! println!("{} stories", hits.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod types;

/// Default search endpoint (public Hacker News Algolia API)
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

pub use client::{SearchClient, SearchError};
pub use http_client::HttpSearchClient;
pub use types::{SearchResponse, StoryDto};
