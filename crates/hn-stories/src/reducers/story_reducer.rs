//! Story Reducer
//!
//! Handles state updates for the story list using tagged StoryAction.

use crate::actions::StoryAction;
use crate::state::{LoadingState, StoryListState};

/// Reduce story list state based on actions
///
/// Load completions carry the generation of the request they answer;
/// anything not matching the latest `LoadStart` is stale and dropped,
/// so the most recently issued request always wins.
pub fn reduce(mut state: StoryListState, action: &StoryAction) -> StoryListState {
    match action {
        StoryAction::LoadStart { query, seq } => {
            state.loading = LoadingState::Loading;
            state.request_seq = *seq;
            log::debug!("Story loading started for {:?} (seq {})", query, seq);
        }

        StoryAction::Loaded {
            seq,
            stories,
            fetched_at,
        } => {
            if *seq != state.request_seq {
                log::debug!(
                    "Dropping stale story result (seq {} != current {})",
                    seq,
                    state.request_seq
                );
                return state;
            }
            state.stories = stories.clone();
            state.loading = LoadingState::Loaded;
            state.last_updated = Some(*fetched_at);
            state.cursor = 0;
            log::info!("Loaded {} stories", stories.len());
        }

        StoryAction::LoadError { seq } => {
            if *seq != state.request_seq {
                log::debug!(
                    "Dropping stale story error (seq {} != current {})",
                    seq,
                    state.request_seq
                );
                return state;
            }
            // The list keeps its previous contents; only the lifecycle flips.
            state.loading = LoadingState::Failed;
        }

        StoryAction::Dismiss { id } => {
            let before = state.stories.len();
            state.stories.retain(|story| story.id != *id);
            if state.stories.len() == before {
                log::debug!("Dismiss: story {:?} not in list", id);
            }
            // Keep the cursor on a valid row after removal
            if state.cursor >= state.stories.len() {
                state.cursor = state.stories.len().saturating_sub(1);
            }
        }

        StoryAction::CursorNext => {
            if !state.stories.is_empty() {
                state.cursor = (state.cursor + 1) % state.stories.len();
            }
        }

        StoryAction::CursorPrevious => {
            if !state.stories.is_empty() {
                state.cursor = if state.cursor == 0 {
                    state.stories.len() - 1
                } else {
                    state.cursor - 1
                };
            }
        }

        StoryAction::CursorTop => {
            state.cursor = 0;
        }

        StoryAction::CursorBottom => {
            if !state.stories.is_empty() {
                state.cursor = state.stories.len() - 1;
            }
        }

        // Request actions - handled by the story middleware
        StoryAction::Refresh | StoryAction::OpenInBrowser => {}
    }

    state
}
