//! Side-effect descriptions returned by transforms.

use super::page::Page;

/// Effects that the UI layer should execute against its host.
/// Transforms return these instead of performing side effects directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Make the given page the active one.
    Navigate(Page),
    /// Show or hide the terminal panel.
    ToggleTerminal,
}
