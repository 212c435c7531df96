//! Search input actions
//!
//! Edits apply to the live search term; only `Submit` derives a new
//! request target from it.

/// Actions for the search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Give the search box input focus
    FocusInput,
    /// Leave the search box, back to list navigation
    CancelInput,
    /// Character typed into the search box
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear the entire term (Ctrl+U)
    ClearLine,
    /// Enter pressed - submit the current term as the request target
    Submit,
}
