//! The command table understood by the terminal.

/// Which handler a command dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Cd,
    Ls,
    Pwd,
    Whoami,
    Clear,
    Exit,
    Skills,
}

/// A named entry in the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Invocation form shown by `help`.
    pub usage: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Ordered, read-only set of commands. Order drives `help` output and
/// suggestion ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    specs: Vec<CommandSpec>,
}

impl CommandTable {
    pub fn new(specs: Vec<CommandSpec>) -> Self {
        Self { specs }
    }

    /// The portfolio command set.
    pub fn standard() -> Self {
        Self::new(vec![
            CommandSpec {
                name: "help",
                usage: "help",
                description: "Show available commands",
                kind: CommandKind::Help,
            },
            CommandSpec {
                name: "cd",
                usage: "cd <page>",
                description: "Navigate to page (home, about, experience, projects, skills, contact)",
                kind: CommandKind::Cd,
            },
            CommandSpec {
                name: "ls",
                usage: "ls",
                description: "List current page contents",
                kind: CommandKind::Ls,
            },
            CommandSpec {
                name: "pwd",
                usage: "pwd",
                description: "Show current location",
                kind: CommandKind::Pwd,
            },
            CommandSpec {
                name: "whoami",
                usage: "whoami",
                description: "Display user information",
                kind: CommandKind::Whoami,
            },
            CommandSpec {
                name: "clear",
                usage: "clear",
                description: "Clear terminal",
                kind: CommandKind::Clear,
            },
            CommandSpec {
                name: "exit",
                usage: "exit",
                description: "Close terminal",
                kind: CommandKind::Exit,
            },
            CommandSpec {
                name: "skills",
                usage: "skills --list",
                description: "Display technical skills",
                kind: CommandKind::Skills,
            },
        ])
    }

    /// Find a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.specs
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
