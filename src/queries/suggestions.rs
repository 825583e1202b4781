//! Command-name completion.

use crate::data::command::CommandTable;

/// Most suggestions offered for one input.
pub const MAX_SUGGESTIONS: usize = 3;

/// Command names starting with `partial`, ignoring case, in table order.
pub fn compute_suggestions(commands: &CommandTable, partial: &str) -> Vec<String> {
    if partial.is_empty() {
        return Vec::new();
    }
    let partial = partial.to_lowercase();
    commands
        .iter()
        .filter(|spec| spec.name.to_lowercase().starts_with(&partial))
        .take(MAX_SUGGESTIONS)
        .map(|spec| spec.name.to_string())
        .collect()
}
