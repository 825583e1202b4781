//! Handlers for each entry in the command table.
//!
//! Handlers never touch the host directly. Navigation and visibility changes
//! come back as an [`Effect`] on the [`Outcome`]; `clear` comes back as a flag
//! the interpreter acts on before recording the transcript.

use crate::data::command::{CommandKind, CommandTable};
use crate::data::effect::Effect;
use crate::data::page::Page;
use crate::data::profile::Profile;
use crate::queries::terminal::{help_text, listing, skills_summary, working_dir};

/// Read-only inputs a handler may consult.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub profile: &'a Profile,
    pub page: Page,
}

/// Result of running one handler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub output: String,
    pub effect: Option<Effect>,
    pub clear_transcript: bool,
}

impl Outcome {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    fn with_effect(output: impl Into<String>, effect: Effect) -> Self {
        Self {
            output: output.into(),
            effect: Some(effect),
            clear_transcript: false,
        }
    }
}

/// Run the handler for `kind` with the given arguments.
pub fn run(
    kind: CommandKind,
    args: &[&str],
    commands: &CommandTable,
    ctx: &CommandContext<'_>,
) -> Outcome {
    match kind {
        CommandKind::Help => Outcome::text(help_text(commands)),
        CommandKind::Cd => cd(args, ctx.page),
        CommandKind::Ls => Outcome::text(listing(ctx.profile, ctx.page)),
        CommandKind::Pwd => Outcome::text(working_dir(ctx.profile, ctx.page)),
        CommandKind::Whoami => Outcome::text(ctx.profile.identity.join("\n")),
        CommandKind::Clear => Outcome {
            clear_transcript: true,
            ..Outcome::default()
        },
        CommandKind::Exit => Outcome::with_effect("Terminal closed", Effect::ToggleTerminal),
        CommandKind::Skills => skills(args, ctx.profile),
    }
}

fn cd(args: &[&str], current: Page) -> Outcome {
    let Some(target) = args.first() else {
        return Outcome::text(format!(
            "cd: missing operand\nTry: {}",
            Page::valid_names()
        ));
    };

    let page = if *target == ".." {
        Some(current.previous())
    } else {
        Page::from_name(target)
    };

    match page {
        Some(page) => {
            Outcome::with_effect(format!("Navigated to {}", page), Effect::Navigate(page))
        }
        None => {
            tracing::warn!(requested = %target, "cd target rejected");
            Outcome::text(format!(
                "cd: cannot access '{}': No such directory\nTry: {}",
                target,
                Page::valid_names()
            ))
        }
    }
}

fn skills(args: &[&str], profile: &Profile) -> Outcome {
    if args.first() == Some(&"--list") {
        Outcome::text(skills_summary(profile))
    } else {
        Outcome::with_effect("Navigated to skills page", Effect::Navigate(Page::Skills))
    }
}
