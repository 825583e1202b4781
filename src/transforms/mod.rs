//! State transitions. Each function takes state by `&mut` and returns any
//! effect the UI layer must carry out.

pub mod commands;
pub mod history;
pub mod input;
pub mod interpreter;
pub mod ui;
