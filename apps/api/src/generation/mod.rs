//! Prose generation from parsed resume data.

pub mod bio;
pub mod handlers;
pub mod prompts;
