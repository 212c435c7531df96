//! Application State

use super::{SearchState, StoryListState};
use crate::theme::Theme;
use hn_stories_config::AppConfig;

/// Which view is currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Search box and story table
    #[default]
    Stories,
    /// Help overlay on top of the stories view
    Help,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub active_view: ActiveView,
    pub search: SearchState,
    pub stories: StoryListState,
    pub theme: Theme,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Create initial state with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            active_view: ActiveView::default(),
            search: SearchState::default(),
            stories: StoryListState::default(),
            theme: Theme::default(),
            config: AppConfig::default(),
        }
    }
}
