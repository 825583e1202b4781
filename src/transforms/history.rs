//! Transforms for recalling previously executed lines.

use crate::data::state::TerminalState;
use crate::queries::suggestions::compute_suggestions;

/// Step one entry further into the past, stopping at the oldest.
pub fn recall_previous(state: &mut TerminalState) {
    let len = state.history.len();
    if len == 0 {
        return;
    }
    let cursor = match state.history_cursor {
        None => 0,
        Some(i) => (i + 1).min(len - 1),
    };
    state.history_cursor = Some(cursor);
    load_entry(state, cursor);
}

/// Step one entry toward the present. Moving past the newest entry returns
/// to a blank line.
pub fn recall_next(state: &mut TerminalState) {
    match state.history_cursor {
        None => {}
        Some(0) => {
            state.history_cursor = None;
            state.input.clear();
            state.suggestions.clear();
        }
        Some(i) => {
            state.history_cursor = Some(i - 1);
            load_entry(state, i - 1);
        }
    }
}

fn load_entry(state: &mut TerminalState, cursor: usize) {
    let index = state.history.len() - 1 - cursor;
    state.input = state.history[index].clone();
    state.suggestions = compute_suggestions(&state.commands, &state.input);
}
