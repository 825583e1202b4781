//! Read-only queries over application state.

pub mod suggestions;
pub mod terminal;
