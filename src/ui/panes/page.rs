//! Page view rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::data::state::AppState;

/// Draw the active page from the profile's page text.
pub fn draw(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = state.theme;

    let mut lines = vec![
        Line::from(Span::styled(
            state.page.title(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match state.profile.pages.get(&state.page) {
        Some(text) if !text.is_empty() => {
            lines.extend(text.iter().map(|line| Line::from(line.as_str())));
        }
        _ => lines.push(Line::from(Span::styled(
            "(Nothing here yet)",
            Style::default().fg(theme.dim()),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.bg()).fg(theme.fg()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dim()))
                .title(format!(" ~/{} ", state.page)),
        );

    frame.render_widget(paragraph, area);
}
