//! Transforms for UI state changes outside the terminal line editor.

use crate::data::effect::Effect;
use crate::data::state::AppState;
use crate::transforms::commands::CommandContext;
use crate::transforms::interpreter;

/// Submit the terminal's input line, using the current page as context.
pub fn submit_terminal(state: &mut AppState) -> Option<Effect> {
    let ctx = CommandContext {
        profile: &state.profile,
        page: state.page,
    };
    interpreter::submit(&mut state.terminal, &ctx)
}

/// Navigate to the page after the current one.
pub fn next_page(state: &AppState) -> Effect {
    Effect::Navigate(state.page.next())
}

/// Navigate to the page before the current one.
pub fn prev_page(state: &AppState) -> Effect {
    Effect::Navigate(state.page.previous())
}

/// Toggle theme between dark and light.
pub fn toggle_theme(state: &mut AppState) {
    state.theme = state.theme.toggle();
}

/// Request quit.
pub fn request_quit(state: &mut AppState) {
    state.should_quit = true;
}
