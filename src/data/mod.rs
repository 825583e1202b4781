//! Pure data types: no I/O, no side effects.

pub mod command;
pub mod effect;
pub mod page;
pub mod profile;
pub mod state;
pub mod transcript;
