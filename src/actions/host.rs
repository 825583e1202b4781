//! Applying effects to whatever hosts the terminal.

use crate::data::effect::Effect;
use crate::data::page::Page;
use crate::data::state::AppState;

/// The collaborators a terminal drives: something that shows pages and
/// something that shows or hides the terminal itself.
pub trait Host {
    /// Make `page` the active page.
    fn navigate(&mut self, page: Page);
    /// Flip terminal panel visibility.
    fn toggle_terminal(&mut self);
}

/// Carry out one effect against the host.
pub fn apply<H: Host + ?Sized>(host: &mut H, effect: Effect) {
    tracing::info!(?effect, "applying effect");
    match effect {
        Effect::Navigate(page) => host.navigate(page),
        Effect::ToggleTerminal => host.toggle_terminal(),
    }
}

impl Host for AppState {
    fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    fn toggle_terminal(&mut self) {
        self.terminal_visible = !self.terminal_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::profile::Profile;

    #[derive(Default)]
    struct RecordingHost {
        pages: Vec<Page>,
        toggles: usize,
    }

    impl Host for RecordingHost {
        fn navigate(&mut self, page: Page) {
            self.pages.push(page);
        }

        fn toggle_terminal(&mut self) {
            self.toggles += 1;
        }
    }

    #[test]
    fn test_apply_routes_effects() {
        let mut host = RecordingHost::default();
        apply(&mut host, Effect::Navigate(Page::Projects));
        apply(&mut host, Effect::ToggleTerminal);
        apply(&mut host, Effect::Navigate(Page::Home));
        assert_eq!(host.pages, vec![Page::Projects, Page::Home]);
        assert_eq!(host.toggles, 1);
    }

    #[test]
    fn test_app_state_as_host() {
        let mut state = AppState::new(Profile::default(), Page::Home);
        apply(&mut state, Effect::Navigate(Page::Contact));
        assert_eq!(state.page, Page::Contact);
        apply(&mut state, Effect::ToggleTerminal);
        assert!(!state.terminal_visible);
        apply(&mut state, Effect::ToggleTerminal);
        assert!(state.terminal_visible);
    }

    #[test]
    fn test_terminal_session_drives_host() {
        use crate::transforms::ui::submit_terminal;

        let mut state = AppState::new(Profile::default(), Page::Home);
        for line in ["cd about", "cd ..", "skills", "skills --list", "cd nowhere", "exit"] {
            state.terminal.input = line.to_string();
            if let Some(effect) = submit_terminal(&mut state) {
                apply(&mut state, effect);
            }
        }
        assert_eq!(state.page, Page::Skills);
        assert!(!state.terminal_visible);
        // welcome + six commands
        assert_eq!(state.terminal.transcript.len(), 7);
    }
}
