//! Views
//!
//! Widgets render from `&AppState` only; anything display-shaped is
//! pre-computed in the view models.

pub mod help_view;
pub mod stories_view;

use crate::state::{ActiveView, AppState};
use ratatui::{layout::Rect, Frame};

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    stories_view::render(state, area, f);

    // The help view floats on top of the stories view
    if state.active_view == ActiveView::Help {
        help_view::render(state, area, f);
    }
}
