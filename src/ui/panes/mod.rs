//! Pane renderers.

pub mod nav;
pub mod page;
pub mod terminal;
