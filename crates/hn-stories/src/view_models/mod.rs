//! View models
//!
//! Pre-compute display text and colors from state so the widgets stay
//! free of presentation logic.

mod story_table;

pub use story_table::{StoryRowViewModel, StoryTableHeaderViewModel, StoryTableViewModel};
