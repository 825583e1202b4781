//! Side-effecting operations: file I/O and applying effects to the host.

pub mod files;
pub mod host;
