//! Session Middleware
//!
//! Remembers the last search term across runs:
//! - Loads the session once on bootstrap and dispatches `Session::Loaded`
//!   so the reducer can seed the search state
//! - Persists the term whenever an edit changes it, and again on quit
//! - The write-through is suppressed until the initial load has happened,
//!   so the just-read value is not immediately written back
//!
//! Persistence goes through the `TermStore` capability so the middleware
//! is testable without touching the filesystem.

use crate::actions::{Action, BootstrapAction, GlobalAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, SearchState};
use hn_stories_config::Session;

/// Persistence capability for the search term
pub trait TermStore: Send {
    /// Read the stored term, if any
    fn load(&mut self) -> Option<String>;
    /// Write the term through to the backing store
    fn save(&mut self, term: &str);
}

/// File-backed term store wrapping the session file
pub struct FileTermStore {
    session: Session,
}

impl FileTermStore {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }
}

impl Default for FileTermStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TermStore for FileTermStore {
    fn load(&mut self) -> Option<String> {
        self.session = Session::load();
        self.session.last_search().map(|s| s.to_string())
    }

    fn save(&mut self, term: &str) {
        self.session.set_last_search(term);
        if let Err(e) = self.session.save() {
            log::error!("Failed to save session: {}", e);
        }
    }
}

/// Middleware for session state persistence
pub struct SessionMiddleware {
    store: Box<dyn TermStore>,
    loaded: bool,
}

impl SessionMiddleware {
    pub fn new() -> Self {
        Self::with_store(Box::new(FileTermStore::new()))
    }

    /// Create with an injected store (used by tests)
    pub fn with_store(store: Box<dyn TermStore>) -> Self {
        Self {
            store,
            loaded: false,
        }
    }
}

impl Default for SessionMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if !self.loaded {
                    log::info!("SessionMiddleware: loading session");
                    let last_search = self.store.load();
                    self.loaded = true;
                    dispatcher.dispatch(Action::Session(SessionAction::Loaded { last_search }));
                }
                true // Pass through
            }

            Action::Search(search_action) => {
                // This runs before the reducer applies the edit, so compute
                // the post-edit term with the same helper the reducer uses.
                if self.loaded {
                    if let Some(term) =
                        SearchState::edited_term(&state.search.term, search_action)
                    {
                        self.store.save(&term);
                    }
                }
                true
            }

            // Save the live term once more on quit
            Action::Global(GlobalAction::Quit) => {
                if self.loaded {
                    log::info!("SessionMiddleware: saving session before quit");
                    self.store.save(&state.search.term);
                }
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SearchAction;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    /// In-memory store recording every save
    struct MemoryTermStore {
        initial: Option<String>,
        saves: Arc<Mutex<Vec<String>>>,
    }

    impl TermStore for MemoryTermStore {
        fn load(&mut self) -> Option<String> {
            self.initial.clone()
        }

        fn save(&mut self, term: &str) {
            self.saves.lock().unwrap().push(term.to_string());
        }
    }

    fn middleware_with(
        initial: Option<&str>,
    ) -> (SessionMiddleware, Arc<Mutex<Vec<String>>>) {
        let saves = Arc::new(Mutex::new(Vec::new()));
        let store = MemoryTermStore {
            initial: initial.map(|s| s.to_string()),
            saves: Arc::clone(&saves),
        };
        (SessionMiddleware::with_store(Box::new(store)), saves)
    }

    #[test]
    fn test_bootstrap_dispatches_loaded() {
        let (mut middleware, _saves) = middleware_with(Some("react"));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &dispatcher,
        );

        match rx.try_recv() {
            Ok(Action::Session(SessionAction::Loaded { last_search })) => {
                assert_eq!(last_search.as_deref(), Some("react"));
            }
            other => panic!("unexpected: {:?}", other),
        }

        // A second bootstrap must not reload
        middleware.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &dispatcher,
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_no_write_before_initial_load() {
        let (mut middleware, saves) = middleware_with(Some("react"));
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Search(SearchAction::Char('x')),
            &AppState::default(),
            &dispatcher,
        );

        assert!(saves.lock().unwrap().is_empty());
    }

    #[test]
    fn test_edits_are_written_through_after_load() {
        let (mut middleware, saves) = middleware_with(None);
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &dispatcher,
        );

        let mut state = AppState::default();
        state.search.term = "rus".to_string();

        middleware.handle(
            &Action::Search(SearchAction::Char('t')),
            &state,
            &dispatcher,
        );
        // Submit does not change the term, so nothing is written for it
        middleware.handle(&Action::Search(SearchAction::Submit), &state, &dispatcher);

        assert_eq!(saves.lock().unwrap().as_slice(), ["rust"]);
    }

    #[test]
    fn test_quit_saves_current_term() {
        let (mut middleware, saves) = middleware_with(None);
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &dispatcher,
        );

        let mut state = AppState::default();
        state.search.term = "zig".to_string();

        middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher);

        assert_eq!(saves.lock().unwrap().as_slice(), ["zig"]);
    }
}
