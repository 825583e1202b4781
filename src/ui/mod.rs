//! UI layer: event loop, key dispatch, and rendering coordination.

pub mod app;
pub mod panes;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::actions::host;
use crate::data::effect::Effect;
use crate::data::page::Page;
use crate::data::state::AppState;
use crate::error::Result;
use crate::transforms::{history, input, ui as ui_transforms};

fn main_loop(
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|frame| draw(frame, state))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(state, key.code, key.modifiers);
                }
            }
        }
    }
    Ok(())
}

/// Dispatch one key press to transforms and apply any resulting effect.
pub fn handle_key(state: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        ui_transforms::request_quit(state);
        return;
    }

    let effect = if state.terminal_visible {
        handle_terminal_key(state, key)
    } else {
        handle_page_key(state, key)
    };

    if let Some(effect) = effect {
        host::apply(state, effect);
    }
}

fn handle_terminal_key(state: &mut AppState, key: KeyCode) -> Option<Effect> {
    match key {
        KeyCode::Esc => return Some(Effect::ToggleTerminal),
        KeyCode::Enter => return ui_transforms::submit_terminal(state),
        KeyCode::Up => history::recall_previous(&mut state.terminal),
        KeyCode::Down => history::recall_next(&mut state.terminal),
        KeyCode::Tab => input::accept_suggestion(&mut state.terminal),
        KeyCode::Backspace => input::pop_char(&mut state.terminal),
        KeyCode::Char(c) => input::push_char(&mut state.terminal, c),
        _ => {}
    }
    None
}

// Page mode: thin dispatcher calling transforms
fn handle_page_key(state: &mut AppState, key: KeyCode) -> Option<Effect> {
    match key {
        KeyCode::Char('`') => Some(Effect::ToggleTerminal),
        KeyCode::Char('q') => {
            ui_transforms::request_quit(state);
            None
        }
        KeyCode::Char('t') => {
            ui_transforms::toggle_theme(state);
            None
        }
        KeyCode::Left | KeyCode::Char('h') => Some(ui_transforms::prev_page(state)),
        KeyCode::Right | KeyCode::Char('l') => Some(ui_transforms::next_page(state)),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(Effect::Navigate(Page::ALL[index]))
        }
        _ => None,
    }
}

fn draw(frame: &mut Frame, state: &AppState) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    panes::nav::draw(frame, state, main_chunks[0]);

    if state.terminal_visible {
        let body_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[1]);
        panes::page::draw(frame, state, body_chunks[0]);
        panes::terminal::draw(frame, state, body_chunks[1]);
    } else {
        panes::page::draw(frame, state, main_chunks[1]);
    }

    draw_status_bar(frame, state, main_chunks[2]);
}

fn draw_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = state.theme;

    let status = if state.terminal_visible {
        " TERMINAL │ [Enter] Run │ [↑/↓] History │ [Tab] Complete │ [Esc] Close │ [Ctrl-C] Quit "
            .to_string()
    } else {
        format!(
            " [`] Open Terminal │ [←/→] Page │ [1-6] Jump │ [t] Theme │ [q] Quit │ {} ",
            state.page.title()
        )
    };

    let paragraph = Paragraph::new(Line::from(status))
        .style(Style::default().bg(theme.dim()).fg(theme.fg()));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::profile::Profile;

    fn make_state() -> AppState {
        AppState::new(Profile::default(), Page::Home)
    }

    fn type_line(state: &mut AppState, line: &str) {
        for c in line.chars() {
            handle_key(state, KeyCode::Char(c), KeyModifiers::NONE);
        }
        handle_key(state, KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn test_typed_command_navigates() {
        let mut state = make_state();
        type_line(&mut state, "cd projects");
        assert_eq!(state.page, Page::Projects);
        assert!(state.terminal.input.is_empty());
    }

    #[test]
    fn test_tab_completes_then_runs() {
        let mut state = make_state();
        handle_key(&mut state, KeyCode::Char('s'), KeyModifiers::NONE);
        handle_key(&mut state, KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(state.terminal.suggestions, vec!["skills"]);
        handle_key(&mut state, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(state.terminal.input, "skills");
        handle_key(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(state.page, Page::Skills);
    }

    #[test]
    fn test_arrows_recall_history() {
        let mut state = make_state();
        type_line(&mut state, "pwd");
        type_line(&mut state, "ls");
        handle_key(&mut state, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(state.terminal.input, "ls");
        handle_key(&mut state, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(state.terminal.input, "pwd");
        handle_key(&mut state, KeyCode::Down, KeyModifiers::NONE);
        handle_key(&mut state, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(state.terminal.input, "");
    }

    #[test]
    fn test_exit_and_reopen() {
        let mut state = make_state();
        type_line(&mut state, "exit");
        assert!(!state.terminal_visible);

        // Page keys apply while hidden
        handle_key(&mut state, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(state.page, Page::About);
        handle_key(&mut state, KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(state.page, Page::Skills);

        handle_key(&mut state, KeyCode::Char('`'), KeyModifiers::NONE);
        assert!(state.terminal_visible);
        handle_key(&mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!state.terminal_visible);
    }

    #[test]
    fn test_vim_keys_step_pages_only_when_hidden() {
        let mut state = make_state();
        handle_key(&mut state, KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.terminal.input, "l");

        handle_key(&mut state, KeyCode::Esc, KeyModifiers::NONE);
        handle_key(&mut state, KeyCode::Char('l'), KeyModifiers::NONE);
        handle_key(&mut state, KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(state.page, Page::Experience);
        handle_key(&mut state, KeyCode::Char('h'), KeyModifiers::NONE);
        assert_eq!(state.page, Page::About);
    }

    #[test]
    fn test_q_types_into_visible_terminal() {
        let mut state = make_state();
        handle_key(&mut state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!state.should_quit);
        assert_eq!(state.terminal.input, "q");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = make_state();
        handle_key(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(state.should_quit);
    }
}
