//! Story list actions
//!
//! The load lifecycle is a triple: `LoadStart` is dispatched by the fetch
//! coordinator when a request goes out, followed by exactly one of
//! `Loaded` or `LoadError`. Completions carry the generation (`seq`) of
//! the request they answer so stale responses can be dropped.

use crate::domain_models::Story;
use chrono::{DateTime, Local};

/// Actions for the story list
#[derive(Debug, Clone)]
pub enum StoryAction {
    // Load lifecycle
    /// A search request went out for `query` with generation `seq`
    LoadStart { query: String, seq: u64 },
    /// Stories arrived for the request with generation `seq`
    Loaded {
        seq: u64,
        stories: Vec<Story>,
        fetched_at: DateTime<Local>,
    },
    /// The request with generation `seq` failed (cause is logged, not kept)
    LoadError { seq: u64 },

    // List operations
    /// Remove the story with this id from the list
    Dismiss { id: String },
    /// Re-run the search for the current request target
    Refresh,
    /// Open the story under the cursor in the browser
    OpenInBrowser,

    // Cursor movement
    /// Move cursor to the next story (wraps)
    CursorNext,
    /// Move cursor to the previous story (wraps)
    CursorPrevious,
    /// Move cursor to the first story
    CursorTop,
    /// Move cursor to the last story
    CursorBottom,
}
