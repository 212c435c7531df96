//! Session actions
//!
//! Actions for session state management (load/restore).

/// Actions for session lifecycle management
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Session state loaded from disk
    /// Carries the search term from the previous run, if any
    Loaded { last_search: Option<String> },
}
