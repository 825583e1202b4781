//! Application setup, teardown, and main entry point.

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::Terminal;
use std::io::stdout;

use crate::data::state::AppState;
use crate::error::Result;

/// Run the TUI application.
pub fn run(state: &mut AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(ratatui::backend::CrosstermBackend::new(stdout()))?;

    tracing::info!(page = %state.page, "session started");

    // Main loop
    let result = super::main_loop(&mut terminal, state);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    tracing::info!(
        commands = state.terminal.history.len(),
        "session ended"
    );
    result
}
