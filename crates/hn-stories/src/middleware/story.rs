//! Story Middleware
//!
//! The fetch coordinator. Handles side effects for loading stories from
//! the search API:
//! - Fires the initial fetch when a restored session carries a term
//! - Fetches on every non-empty submit and on refresh
//! - Dispatches `LoadStart` followed by exactly one of `Loaded`/`LoadError`
//!
//! Every request is stamped with a generation counter. The reducer drops
//! completions from superseded requests, so a slow response can never
//! overwrite the result of a newer one.

use crate::actions::{Action, SearchAction, SessionAction, StoryAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Story;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser;
use hn_search_client::SearchClient;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for loading stories from the search API
pub struct StoryMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// Search API client
    client: Arc<dyn SearchClient>,
    /// Generation counter pairing requests with their completions
    seq: u64,
}

impl StoryMiddleware {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");

        Self {
            runtime,
            client,
            seq: 0,
        }
    }

    /// Issue a search request for `query`
    ///
    /// Dispatches `LoadStart` synchronously, then spawns a single fetch
    /// whose completion re-enters the store through the dispatcher.
    fn start_fetch(&mut self, query: &str, dispatcher: &Dispatcher) {
        self.seq += 1;
        let seq = self.seq;

        dispatcher.dispatch(Action::Story(StoryAction::LoadStart {
            query: query.to_string(),
            seq,
        }));

        log::info!("Spawning search for {:?} (seq {})", query, seq);

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let query = query.to_string();
        self.runtime
            .spawn(fetch_and_dispatch(client, query, seq, dispatcher));
    }
}

impl Middleware for StoryMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // A restored session term triggers the first fetch
            Action::Session(SessionAction::Loaded { last_search }) => {
                if let Some(term) = last_search.as_deref().filter(|t| !t.is_empty()) {
                    self.start_fetch(term, dispatcher);
                }
                true // Let action pass through to the reducer
            }

            Action::Search(SearchAction::Submit) => {
                // Empty submit: no request, no target change (the reducer
                // ignores it too)
                if state.search.term.is_empty() {
                    return true;
                }
                let term = state.search.term.clone();
                self.start_fetch(&term, dispatcher);
                true
            }

            Action::Story(StoryAction::Refresh) => {
                if state.search.submitted_query.is_empty() {
                    log::debug!("Refresh ignored: nothing submitted yet");
                } else {
                    let query = state.search.submitted_query.clone();
                    self.start_fetch(&query, dispatcher);
                }
                true
            }

            Action::Story(StoryAction::OpenInBrowser) => {
                match state.stories.cursor_story() {
                    Some(story) => match &story.url {
                        Some(url) => browser::open_url(url),
                        None => log::debug!("Story {} has no url to open", story.id),
                    },
                    None => log::debug!("OpenInBrowser with no story under cursor"),
                }
                true
            }

            _ => true, // Pass through all other actions
        }
    }
}

/// Run one search and dispatch its single completion
///
/// Failures of any kind collapse uniformly into `LoadError`; the cause is
/// logged here and not carried in state.
async fn fetch_and_dispatch(
    client: Arc<dyn SearchClient>,
    query: String,
    seq: u64,
    dispatcher: Dispatcher,
) {
    match client.search_stories(&query).await {
        Ok(hits) => {
            let stories: Vec<Story> = hits.into_iter().map(Story::from).collect();
            log::info!(
                "Search for {:?} returned {} stories (seq {})",
                query,
                stories.len(),
                seq
            );
            dispatcher.dispatch(Action::Story(StoryAction::Loaded {
                seq,
                stories,
                fetched_at: chrono::Local::now(),
            }));
        }
        Err(e) => {
            log::error!("Search for {:?} failed (seq {}): {}", query, seq, e);
            dispatcher.dispatch(Action::Story(StoryAction::LoadError { seq }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hn_search_client::{SearchError, StoryDto};
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    struct StubClient {
        hits: Vec<StoryDto>,
    }

    #[async_trait]
    impl SearchClient for StubClient {
        async fn search_stories(&self, _query: &str) -> Result<Vec<StoryDto>, SearchError> {
            Ok(self.hits.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl SearchClient for FailingClient {
        async fn search_stories(&self, _query: &str) -> Result<Vec<StoryDto>, SearchError> {
            Err(SearchError::Status(500))
        }
    }

    fn dto(id: &str, title: &str) -> StoryDto {
        StoryDto {
            id: id.to_string(),
            title: Some(title.to_string()),
            url: None,
            author: "author".to_string(),
            num_comments: Some(0),
            points: Some(0),
        }
    }

    fn recv(rx: &Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5)).expect("no action")
    }

    #[tokio::test]
    async fn test_fetch_success_dispatches_one_loaded() {
        let client: Arc<dyn SearchClient> = Arc::new(StubClient {
            hits: vec![dto("0", "React"), dto("1", "Redux")],
        });
        let (tx, rx) = mpsc::channel();

        fetch_and_dispatch(client, "react".to_string(), 7, Dispatcher::new(tx)).await;

        match recv(&rx) {
            Action::Story(StoryAction::Loaded { seq, stories, .. }) => {
                assert_eq!(seq, 7);
                // Response order is preserved
                let ids: Vec<&str> = stories.iter().map(|s| s.id.as_str()).collect();
                assert_eq!(ids, vec!["0", "1"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
        // Exactly one completion
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_fetch_failure_dispatches_one_error() {
        let client: Arc<dyn SearchClient> = Arc::new(FailingClient);
        let (tx, rx) = mpsc::channel();

        fetch_and_dispatch(client, "react".to_string(), 3, Dispatcher::new(tx)).await;

        match recv(&rx) {
            Action::Story(StoryAction::LoadError { seq }) => assert_eq!(seq, 3),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_empty_submit_fetches_nothing() {
        let mut middleware = StoryMiddleware::new(Arc::new(StubClient { hits: vec![] }));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let state = AppState::default(); // term is empty
        assert!(middleware.handle(&Action::Search(SearchAction::Submit), &state, &dispatcher));

        assert!(rx.try_recv().is_err());
        assert_eq!(middleware.seq, 0);
    }

    #[test]
    fn test_submit_dispatches_load_start_then_completion() {
        let mut middleware = StoryMiddleware::new(Arc::new(StubClient {
            hits: vec![dto("0", "React")],
        }));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let mut state = AppState::default();
        state.search.term = "react".to_string();

        middleware.handle(&Action::Search(SearchAction::Submit), &state, &dispatcher);

        // LoadStart goes out synchronously, before any completion
        match recv(&rx) {
            Action::Story(StoryAction::LoadStart { query, seq }) => {
                assert_eq!(query, "react");
                assert_eq!(seq, 1);
            }
            other => panic!("unexpected: {:?}", other),
        }

        match recv(&rx) {
            Action::Story(StoryAction::Loaded { seq, stories, .. }) => {
                assert_eq!(seq, 1);
                assert_eq!(stories.len(), 1);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_each_fetch_gets_a_fresh_generation() {
        let mut middleware = StoryMiddleware::new(Arc::new(StubClient { hits: vec![] }));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let mut state = AppState::default();
        state.search.term = "rust".to_string();
        state.search.submitted_query = "rust".to_string();

        middleware.handle(&Action::Search(SearchAction::Submit), &state, &dispatcher);
        middleware.handle(&Action::Story(StoryAction::Refresh), &state, &dispatcher);

        let seqs: Vec<u64> = rx
            .try_iter()
            .filter_map(|a| match a {
                Action::Story(StoryAction::LoadStart { seq, .. }) => Some(seq),
                _ => None,
            })
            .collect();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[test]
    fn test_restored_session_triggers_initial_fetch() {
        let mut middleware = StoryMiddleware::new(Arc::new(StubClient { hits: vec![] }));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Session(SessionAction::Loaded {
                last_search: Some("react".to_string()),
            }),
            &AppState::default(),
            &dispatcher,
        );

        assert!(matches!(
            recv(&rx),
            Action::Story(StoryAction::LoadStart { seq: 1, .. })
        ));
    }

    #[test]
    fn test_empty_restored_session_fetches_nothing() {
        let mut middleware = StoryMiddleware::new(Arc::new(StubClient { hits: vec![] }));
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Session(SessionAction::Loaded { last_search: None }),
            &AppState::default(),
            &dispatcher,
        );

        assert!(rx.try_recv().is_err());
    }
}
