//! Bootstrap actions
//!
//! Dispatched once before the event loop starts.

/// Startup actions
#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Kick off initialization (session load, initial fetch)
    Start,
}
