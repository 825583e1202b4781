//! Navigation bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::data::page::Page;
use crate::data::state::AppState;

/// Draw the page tabs with the current page highlighted.
pub fn draw(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = state.theme;
    let titles = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {}", i + 1, page.title()));

    let tabs = Tabs::new(titles)
        .select(state.page.index())
        .style(Style::default().fg(theme.dim()))
        .highlight_style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dim()))
                .title(format!(" {}@{} ", state.profile.user, state.profile.host)),
        );

    frame.render_widget(tabs, area);
}
