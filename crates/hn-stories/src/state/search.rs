//! Search input state

use crate::actions::SearchAction;

/// Search input state
///
/// `term` follows every keystroke; `submitted_query` is the request
/// target and only changes on a non-empty submit. The split is what keeps
/// typing from firing a request per keystroke.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Live text in the search box
    pub term: String,
    /// The query that was last sent to the network
    pub submitted_query: String,
    /// Whether the search box has input focus
    pub editing: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            submitted_query: String::new(),
            // The search box starts focused, like the original form's
            // autofocus behavior.
            editing: true,
        }
    }
}

impl SearchState {
    /// Compute the term an edit action would produce, without applying it
    ///
    /// Shared between the reducer (which applies the edit) and the session
    /// middleware (which persists the post-edit value before the reducer
    /// has run). Returns None for actions that do not change the term.
    pub fn edited_term(current: &str, action: &SearchAction) -> Option<String> {
        match action {
            SearchAction::Char(c) => {
                let mut term = current.to_string();
                term.push(*c);
                Some(term)
            }
            SearchAction::Backspace => {
                let mut term = current.to_string();
                term.pop();
                Some(term)
            }
            SearchAction::ClearLine => Some(String::new()),
            _ => None,
        }
    }
}
