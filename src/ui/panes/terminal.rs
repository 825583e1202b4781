//! Terminal pane rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::state::{AppState, Theme};
use crate::queries::terminal::prompt;

/// Draw the transcript, the input line and any suggestions.
pub fn draw(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = state.theme;
    let terminal = &state.terminal;
    let prompt = prompt(&state.profile, state.page);

    let mut lines: Vec<Line> = Vec::new();
    for entry in &terminal.transcript {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", entry.timestamp),
                Style::default().fg(theme.dim()),
            ),
            Span::styled(prompt.clone(), Style::default().fg(theme.prompt())),
            Span::raw(format!(" {}", entry.command_text)),
        ]));
        if let Some(output) = &entry.output {
            lines.extend(
                output
                    .lines()
                    .map(|line| Line::from(Span::styled(line.to_string(), output_style(theme)))),
            );
        }
    }

    let input_row = lines.len();
    lines.push(Line::from(vec![
        Span::styled(prompt.clone(), Style::default().fg(theme.prompt())),
        Span::styled(
            format!(" {}", terminal.input),
            Style::default().fg(theme.accent()),
        ),
    ]));

    if !terminal.suggestions.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(
                "Suggestions: {} (Tab to complete)",
                terminal.suggestions.join(", ")
            ),
            Style::default().fg(theme.dim()),
        )));
    }

    // Keep the input line in view by dropping the oldest rows
    let inner_height = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(inner_height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    let paragraph = Paragraph::new(visible)
        .style(Style::default().bg(theme.bg()).fg(theme.fg()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent()))
                .title(" Terminal (Esc to close) "),
        );

    frame.render_widget(paragraph, area);

    if input_row >= skip {
        let width = prompt.chars().count() + 1 + terminal.input.chars().count();
        if let Some(position) = cursor_position(area, width, input_row - skip) {
            frame.set_cursor_position(position);
        }
    }
}

/// Cursor cell after `width` columns on inner row `row`, if it lies inside the border.
fn cursor_position(area: Rect, width: usize, row: usize) -> Option<(u16, u16)> {
    let x = usize::from(area.x) + 1 + width;
    let y = usize::from(area.y) + 1 + row;
    let right = usize::from(area.x) + usize::from(area.width.saturating_sub(1));
    let bottom = usize::from(area.y) + usize::from(area.height.saturating_sub(1));
    if x >= right || y >= bottom {
        return None;
    }
    Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
}

fn output_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(ratatui::style::Color::Gray),
        Theme::Light => Style::default().fg(ratatui::style::Color::DarkGray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::page::Page;
    use crate::data::profile::Profile;
    use crate::transforms::{input, ui as ui_transforms};
    use ratatui::{backend::TestBackend, Terminal};

    fn make_state() -> AppState {
        AppState::new(Profile::default(), Page::About)
    }

    fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, state, area);
            })
            .unwrap();
        let rows: Vec<String> = terminal
            .backend()
            .buffer()
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        rows
    }

    #[test]
    fn test_renders_welcome_and_prompt() {
        let state = make_state();
        let rows = render(&state, 100, 10);
        let text = rows.join("\n");
        assert!(text.contains("miten@portfolio:~/about$ welcome"));
        assert!(text.contains("Welcome to Miten's Portfolio Terminal!"));
    }

    #[test]
    fn test_renders_suggestions() {
        let mut state = make_state();
        input::set_input(&mut state.terminal, "c");
        let text = render(&state, 100, 10).join("\n");
        assert!(text.contains("Suggestions: cd, clear (Tab to complete)"));
    }

    #[test]
    fn test_scrolls_to_latest_output() {
        let mut state = make_state();
        for _ in 0..5 {
            state.terminal.input = "whoami".to_string();
            ui_transforms::submit_terminal(&mut state);
        }
        state.terminal.input = "pwd".to_string();
        ui_transforms::submit_terminal(&mut state);

        let rows = render(&state, 100, 6);
        let text = rows.join("\n");
        assert!(text.contains("/home/miten/portfolio/about"));
        assert!(!text.contains("welcome"));
    }

    #[test]
    fn test_input_wider_than_u16_renders() {
        let mut state = make_state();
        let prompt_len = prompt(&state.profile, state.page).chars().count();
        state.terminal.input = "a".repeat(65535 - prompt_len);
        let text = render(&state, 80, 10).join("\n");
        assert!(text.contains("miten@portfolio:~/about$ aaaa"));
    }

    #[test]
    fn test_cursor_position_bounds() {
        let area = Rect::new(0, 0, 80, 10);
        assert_eq!(cursor_position(area, 10, 2), Some((11, 3)));
        assert_eq!(cursor_position(area, 78, 0), None);
        assert_eq!(cursor_position(area, 0, 8), None);
        assert_eq!(cursor_position(area, usize::from(u16::MAX), 0), None);
    }
}
