//! The fixed set of portfolio pages and their order.

use serde::{Deserialize, Serialize};

/// A page of the portfolio. Declaration order is navigation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
pub enum Page {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Experience,
        Page::Projects,
        Page::Skills,
        Page::Contact,
    ];

    /// Lower-case token used on the command line and in paths.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Experience => "experience",
            Page::Projects => "projects",
            Page::Skills => "skills",
            Page::Contact => "contact",
        }
    }

    /// Heading shown in the page view and the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Experience => "Experience",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
            Page::Contact => "Contact",
        }
    }

    /// Look up a page by token, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Page::ALL
            .into_iter()
            .find(|page| page.name().eq_ignore_ascii_case(name))
    }

    /// Position in navigation order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The page before this one. `Home` has no predecessor and maps to itself.
    pub fn previous(self) -> Self {
        match self.index() {
            0 => Page::Home,
            i => Page::ALL[i - 1],
        }
    }

    /// The page after this one, staying on the last page.
    pub fn next(self) -> Self {
        Page::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Page::Contact)
    }

    /// Comma-separated list of every page token.
    pub fn valid_names() -> String {
        Page::ALL
            .iter()
            .map(|page| page.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
