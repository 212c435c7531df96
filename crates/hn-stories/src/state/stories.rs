//! Story list state

use crate::domain_models::Story;

/// Load lifecycle of the story list
///
/// A single tagged value instead of independent loading/error flags, so
/// "loading and failed at the same time" is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Last request succeeded
    Loaded,
    /// Last request failed
    Failed,
}

/// Story list state
#[derive(Debug, Clone, Default)]
pub struct StoryListState {
    /// Stories in server response order
    pub stories: Vec<Story>,
    /// Current load lifecycle
    pub loading: LoadingState,
    /// Cursor position in the table
    pub cursor: usize,
    /// Generation of the latest request; completions carrying an older
    /// generation are dropped (last request wins)
    pub request_seq: u64,
    /// Timestamp of the last successful load
    pub last_updated: Option<chrono::DateTime<chrono::Local>>,
}

impl StoryListState {
    /// The story under the cursor, if any
    pub fn cursor_story(&self) -> Option<&Story> {
        self.stories.get(self.cursor)
    }
}
