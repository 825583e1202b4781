//! Transforms for editing the input line.
//!
//! Every edit recomputes the suggestion set in the same call, so suggestions
//! always describe the text currently on screen.

use crate::data::state::TerminalState;
use crate::queries::suggestions::compute_suggestions;

/// Replace the input line.
pub fn set_input(state: &mut TerminalState, text: impl Into<String>) {
    state.input = text.into();
    refresh_suggestions(state);
}

/// Append a typed character.
pub fn push_char(state: &mut TerminalState, c: char) {
    state.input.push(c);
    refresh_suggestions(state);
}

/// Delete the last character, if any.
pub fn pop_char(state: &mut TerminalState) {
    if state.input.pop().is_some() {
        refresh_suggestions(state);
    }
}

/// Complete the input to the first suggestion.
pub fn accept_suggestion(state: &mut TerminalState) {
    if let Some(first) = state.suggestions.first() {
        state.input = first.clone();
        state.suggestions.clear();
    }
}

fn refresh_suggestions(state: &mut TerminalState) {
    state.suggestions = compute_suggestions(&state.commands, &state.input);
}
