//! Pure data types for application state.

use ratatui::style::Color;

use super::command::CommandTable;
use super::page::Page;
use super::profile::Profile;
use super::transcript::TranscriptEntry;

/// Theme for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn bg(self) -> Color {
        match self {
            Theme::Dark => Color::Black,
            Theme::Light => Color::White,
        }
    }

    pub fn fg(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn dim(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    pub fn prompt(self) -> Color {
        match self {
            Theme::Dark => Color::LightBlue,
            Theme::Light => Color::Blue,
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Green,
            Theme::Light => Color::Magenta,
        }
    }
}

/// State of one terminal instance. No methods with side effects.
#[derive(Debug, Clone)]
pub struct TerminalState {
    pub commands: CommandTable,
    /// The uncommitted input line.
    pub input: String,
    /// Prefix matches for `input`, recomputed on every edit.
    pub suggestions: Vec<String>,
    /// Every executed line, oldest first. Append-only.
    pub history: Vec<String>,
    /// Offset from the end of `history` while browsing; `None` on a fresh line.
    pub history_cursor: Option<usize>,
    pub transcript: Vec<TranscriptEntry>,
}

impl TerminalState {
    pub fn new(commands: CommandTable) -> Self {
        Self {
            commands,
            input: String::new(),
            suggestions: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            transcript: Vec::new(),
        }
    }

    /// A terminal whose transcript opens with a greeting.
    pub fn with_welcome(commands: CommandTable, welcome: &str) -> Self {
        let mut state = Self::new(commands);
        state
            .transcript
            .push(TranscriptEntry::now("welcome", welcome));
        state
    }
}

/// Pure application state.
pub struct AppState {
    pub profile: Profile,
    /// The active page; only changed through navigation effects.
    pub page: Page,
    pub terminal_visible: bool,
    pub terminal: TerminalState,
    pub should_quit: bool,
    pub theme: Theme,
}

impl AppState {
    pub fn new(profile: Profile, page: Page) -> Self {
        let terminal = TerminalState::with_welcome(CommandTable::standard(), &profile.welcome);
        Self {
            profile,
            page,
            terminal_visible: true,
            terminal,
            should_quit: false,
            theme: Theme::Dark,
        }
    }
}
