//! View model for the story table
//!
//! Separates presentation logic from domain models and view rendering.

use crate::state::{AppState, LoadingState};
use crate::theme::Theme;
use ratatui::style::Color;

/// View model for the entire story table
#[derive(Debug, Clone)]
pub struct StoryTableViewModel {
    /// Header with title and status
    pub header: StoryTableHeaderViewModel,
    /// Pre-computed rows ready to display
    pub rows: Vec<StoryRowViewModel>,
    /// Current cursor position (for keyboard navigation)
    pub selected_index: usize,
    /// Centered message shown instead of rows (idle, failure, no matches)
    pub empty_message: Option<String>,
}

/// View model for the table header
#[derive(Debug, Clone)]
pub struct StoryTableHeaderViewModel {
    /// Title text: "Hacker Stories: <query>"
    pub title: String,
    /// Status text: "Loading...", "42 stories", etc.
    pub status_text: String,
    /// Status color (from theme)
    pub status_color: Color,
}

/// View model for a single story row
#[derive(Debug, Clone)]
pub struct StoryRowViewModel {
    pub title: String,
    pub url: String,
    pub author: String,
    pub comments: String,
    pub points: String,
}

impl StoryTableViewModel {
    /// Transform state into a display-ready view model
    pub fn from_state(state: &AppState, theme: &Theme) -> Self {
        let header = Self::build_header(state, theme);

        let rows = state
            .stories
            .stories
            .iter()
            .map(|story| StoryRowViewModel {
                title: story.title.clone(),
                url: story.url.clone().unwrap_or_default(),
                author: story.author.clone(),
                comments: story.comments.to_string(),
                points: story.points.to_string(),
            })
            .collect();

        Self {
            header,
            rows,
            selected_index: state.stories.cursor,
            empty_message: Self::empty_message(state),
        }
    }

    fn build_header(state: &AppState, theme: &Theme) -> StoryTableHeaderViewModel {
        let title = if state.search.submitted_query.is_empty() {
            " Hacker Stories ".to_string()
        } else {
            format!(" Hacker Stories: {} ", state.search.submitted_query)
        };

        let (status_text, status_color) = match state.stories.loading {
            LoadingState::Idle => ("press / to search".to_string(), theme.text_muted),
            LoadingState::Loading => ("Loading...".to_string(), theme.status_checking),
            LoadingState::Failed => ("load failed".to_string(), theme.status_error),
            LoadingState::Loaded => {
                let when = state
                    .stories
                    .last_updated
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                (
                    format!(
                        "{} stories at {} [r to refresh]",
                        state.stories.stories.len(),
                        when
                    ),
                    theme.status_success,
                )
            }
        };

        StoryTableHeaderViewModel {
            title,
            status_text,
            status_color,
        }
    }

    /// Message replacing the table body when there are no rows to show
    ///
    /// While loading, an existing list stays visible; only an empty list
    /// shows the loading message.
    fn empty_message(state: &AppState) -> Option<String> {
        if !state.stories.stories.is_empty() {
            return None;
        }
        let message = match state.stories.loading {
            LoadingState::Idle => "Search Hacker News: press / and type a query.",
            LoadingState::Loading => "Loading stories...",
            LoadingState::Failed => "Something went wrong. Press r to retry.",
            LoadingState::Loaded => "No stories matched.",
        };
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;

    fn state_with_stories() -> AppState {
        let mut state = AppState::default();
        state.search.submitted_query = "react".to_string();
        state.stories.loading = LoadingState::Loaded;
        state.stories.stories = vec![
            Story::new("0", "React", "Jordan Walke").with_url("https://reactjs.org/"),
            Story::new("1", "Redux", "Dan Abramov, Andrew Clark"),
        ];
        state
    }

    #[test]
    fn test_rows_follow_state_order() {
        let state = state_with_stories();
        let vm = StoryTableViewModel::from_state(&state, &Theme::default());

        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].title, "React");
        assert_eq!(vm.rows[1].title, "Redux");
        assert!(vm.empty_message.is_none());
    }

    #[test]
    fn test_header_shows_query() {
        let state = state_with_stories();
        let vm = StoryTableViewModel::from_state(&state, &Theme::default());
        assert_eq!(vm.header.title, " Hacker Stories: react ");
    }

    #[test]
    fn test_failure_message_when_list_empty() {
        let mut state = AppState::default();
        state.stories.loading = LoadingState::Failed;

        let vm = StoryTableViewModel::from_state(&state, &Theme::default());
        assert_eq!(
            vm.empty_message.as_deref(),
            Some("Something went wrong. Press r to retry.")
        );
    }

    #[test]
    fn test_loading_keeps_existing_rows_visible() {
        let mut state = state_with_stories();
        state.stories.loading = LoadingState::Loading;

        let vm = StoryTableViewModel::from_state(&state, &Theme::default());
        assert_eq!(vm.rows.len(), 2);
        assert!(vm.empty_message.is_none());
        assert_eq!(vm.header.status_text, "Loading...");
    }
}
