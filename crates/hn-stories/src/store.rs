use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Actions flow through the middleware chain first (side effects), then
/// through the pure reducer. Middleware and async tasks queue follow-up
/// actions on the dispatcher channel, which is drained after each
/// dispatch and once per event-loop tick.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(tx),
            pending: rx,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added. Add middleware
    /// before dispatching the first action.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched by middleware
        self.process_pending();
    }

    /// Drain actions queued on the dispatcher channel
    ///
    /// Called after each dispatch and once per event-loop iteration so
    /// completions from async tasks are picked up between key events.
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.pending.try_recv() {
            self.dispatch(action);
        }
    }
}
