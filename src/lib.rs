//! portfolio-term: a TUI portfolio browser driven by a shell-like command terminal.

pub mod actions;
pub mod data;
pub mod error;
pub mod queries;
pub mod transforms;
pub mod ui;
