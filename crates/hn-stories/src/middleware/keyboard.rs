use crate::actions::{Action, GlobalAction, SearchAction, StoryAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{ActiveView, AppState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
///
/// Translation depends on where focus is: the help overlay, the search
/// box, or the story list. Raw key events are consumed here and never
/// reach the reducer.
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// Handle a key event and dispatch semantic actions
fn handle_key_event(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    // Ctrl+C quits from anywhere, including the search box
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        return;
    }

    match state.active_view {
        ActiveView::Help => handle_help_key(key, dispatcher),
        ActiveView::Stories => {
            if state.search.editing {
                handle_input_key(key, dispatcher);
            } else {
                handle_list_key(key, state, dispatcher);
            }
        }
    }
}

/// Keys while the help overlay is open
fn handle_help_key(key: &KeyEvent, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            dispatcher.dispatch(Action::Global(GlobalAction::ToggleHelp));
        }
        _ => {
            log::trace!("Unhandled key in help view: {:?}", key);
        }
    }
}

/// Keys while the search box has focus
fn handle_input_key(key: &KeyEvent, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Search(SearchAction::CancelInput));
        }
        KeyCode::Enter => {
            dispatcher.dispatch(Action::Search(SearchAction::Submit));
        }
        KeyCode::Backspace => {
            dispatcher.dispatch(Action::Search(SearchAction::Backspace));
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Search(SearchAction::ClearLine));
        }
        // Plain and shifted characters type into the box
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            dispatcher.dispatch(Action::Search(SearchAction::Char(c)));
        }
        _ => {
            log::trace!("Unhandled key in search input: {:?}", key);
        }
    }
}

/// Keys while the story list has focus
fn handle_list_key(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char('?') => {
            dispatcher.dispatch(Action::Global(GlobalAction::ToggleHelp));
        }
        KeyCode::Char('/') | KeyCode::Char('i') => {
            dispatcher.dispatch(Action::Search(SearchAction::FocusInput));
        }

        // Vim navigation
        KeyCode::Char('j') | KeyCode::Down => {
            dispatcher.dispatch(Action::Story(StoryAction::CursorNext));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            dispatcher.dispatch(Action::Story(StoryAction::CursorPrevious));
        }
        KeyCode::Char('g') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Story(StoryAction::CursorTop));
        }
        KeyCode::Char('G') => {
            dispatcher.dispatch(Action::Story(StoryAction::CursorBottom));
        }

        // Dismiss the story under the cursor; the action carries the id so
        // the reducer works on identity, not cursor position
        KeyCode::Char('d') | KeyCode::Char('x') => {
            if let Some(story) = state.stories.cursor_story() {
                dispatcher.dispatch(Action::Story(StoryAction::Dismiss {
                    id: story.id.clone(),
                }));
            }
        }

        KeyCode::Char('o') | KeyCode::Enter => {
            dispatcher.dispatch(Action::Story(StoryAction::OpenInBrowser));
        }
        KeyCode::Char('r') => {
            dispatcher.dispatch(Action::Story(StoryAction::Refresh));
        }

        _ => {
            log::trace!("Unhandled key: {:?}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;
    use crate::state::SearchState;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list_state() -> AppState {
        let mut state = AppState::default();
        state.search.editing = false;
        state.stories.stories = vec![
            Story::new("a", "first", "alice"),
            Story::new("b", "second", "bob"),
        ];
        state.stories.cursor = 1;
        state
    }

    fn dispatched(state: &AppState, event: KeyEvent) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        handle_key_event(&event, state, &dispatcher);
        rx.try_iter().collect()
    }

    #[test]
    fn test_raw_keys_are_consumed() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();

        let action = Action::Global(GlobalAction::KeyPressed(key(KeyCode::Char('q'))));
        assert!(!middleware.handle(&action, &list_state(), &dispatcher));

        // Other actions pass through
        assert!(middleware.handle(
            &Action::Global(GlobalAction::Quit),
            &list_state(),
            &dispatcher
        ));
    }

    #[test]
    fn test_quit_from_list() {
        let actions = dispatched(&list_state(), key(KeyCode::Char('q')));
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_chars_type_into_search_box() {
        let state = AppState::default(); // search box starts focused
        let actions = dispatched(&state, key(KeyCode::Char('q')));
        // 'q' types, it does not quit
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::Char('q'))]
        ));
    }

    #[test]
    fn test_enter_submits_search() {
        let state = AppState::default();
        let actions = dispatched(&state, key(KeyCode::Enter));
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::Submit)]
        ));
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let state = AppState::default();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = dispatched(&state, event);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_dismiss_carries_cursor_story_id() {
        let actions = dispatched(&list_state(), key(KeyCode::Char('d')));
        match actions.as_slice() {
            [Action::Story(StoryAction::Dismiss { id })] => assert_eq!(id, "b"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_dismiss_on_empty_list_dispatches_nothing() {
        let mut state = list_state();
        state.stories.stories.clear();
        state.stories.cursor = 0;

        let actions = dispatched(&state, key(KeyCode::Char('d')));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_help_toggles_back() {
        let mut state = list_state();
        state.active_view = ActiveView::Help;

        let actions = dispatched(&state, key(KeyCode::Esc));
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::ToggleHelp)]
        ));
    }
}
