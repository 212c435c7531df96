//! Search Reducer
//!
//! Handles state updates for the search input.

use crate::actions::SearchAction;
use crate::state::SearchState;

/// Reduce search input state based on actions
pub fn reduce(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::FocusInput => {
            state.editing = true;
        }

        SearchAction::CancelInput => {
            state.editing = false;
        }

        SearchAction::Char(_) | SearchAction::Backspace | SearchAction::ClearLine => {
            if let Some(term) = SearchState::edited_term(&state.term, action) {
                state.term = term;
            }
        }

        SearchAction::Submit => {
            // An empty submit is a silent no-op: the request target must
            // not change and no request goes out.
            if state.term.is_empty() {
                log::debug!("Ignoring submit with empty search term");
            } else {
                state.submitted_query = state.term.clone();
            }
        }
    }

    state
}

/// Seed the search state from a restored session
pub fn restore(mut state: SearchState, last_search: Option<&str>) -> SearchState {
    if let Some(term) = last_search {
        state.term = term.to_string();
        state.submitted_query = term.to_string();
    }
    state
}
