use crate::actions::{Action, BootstrapAction, GlobalAction, SessionAction};
use crate::reducers::{search_reducer, story_reducer};
use crate::state::{ActiveView, AppState};

/// Root reducer - pure function that produces new state from current state + action
/// Handles global actions itself and delegates the rest to sub-reducers.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }

        Action::Global(GlobalAction::ToggleHelp) => {
            state.active_view = match state.active_view {
                ActiveView::Help => ActiveView::Stories,
                ActiveView::Stories => ActiveView::Help,
            };
        }

        // Raw key events are consumed by the keyboard middleware and
        // normally never reach the reducer.
        Action::Global(GlobalAction::KeyPressed(_)) => {}

        Action::Bootstrap(BootstrapAction::Start) => {
            // Handled by the session middleware
        }

        Action::Session(SessionAction::Loaded { last_search }) => {
            state.search = search_reducer::restore(state.search, last_search.as_deref());
        }

        Action::Search(search_action) => {
            state.search = search_reducer::reduce(state.search, search_action);
        }

        Action::Story(story_action) => {
            state.stories = story_reducer::reduce(state.stories, story_action);
        }
    }

    state
}
