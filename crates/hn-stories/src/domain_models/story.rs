//! Story model
//!
//! Domain model for a single search result.

use hn_search_client::StoryDto;
use serde::{Deserialize, Serialize};

/// A Hacker News story
///
/// Immutable once fetched; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Unique, stable identifier
    pub id: String,
    /// Story title
    pub title: String,
    /// Link target (self posts have none)
    pub url: Option<String>,
    /// Submitter's username
    pub author: String,
    /// Number of comments
    pub comments: usize,
    /// Upvote score
    pub points: usize,
}

impl Story {
    /// Create a new story with the given data
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
            author: author.into(),
            comments: 0,
            points: 0,
        }
    }

    /// Set the link target
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl From<StoryDto> for Story {
    fn from(dto: StoryDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title.unwrap_or_default(),
            url: dto.url,
            author: dto.author,
            comments: dto.num_comments.unwrap_or(0) as usize,
            points: dto.points.unwrap_or(0) as usize,
        }
    }
}
