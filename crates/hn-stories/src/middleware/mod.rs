use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard;
pub mod logging;
pub mod session;
pub mod story;

pub use keyboard::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use session::SessionMiddleware;
pub use story::StoryMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is where all side effects live: HTTP requests, file I/O,
/// key translation. Reducers stay pure.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
