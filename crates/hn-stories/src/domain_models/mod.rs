//! Domain models
//!
//! Application-side types, converted from the wire DTOs at the
//! middleware boundary.

mod story;

pub use story::Story;
