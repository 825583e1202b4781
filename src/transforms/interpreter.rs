//! Transform for submitting a command line.

use crate::data::effect::Effect;
use crate::data::state::TerminalState;
use crate::data::transcript::TranscriptEntry;
use crate::transforms::commands::{self, CommandContext, Outcome};

/// Execute one input line against the terminal.
///
/// Blank lines are ignored entirely. Anything else lands in history, and,
/// unless it was `clear`, in the transcript. Unknown commands produce an
/// error entry rather than failing. Returns the effect the host must apply.
pub fn execute(
    state: &mut TerminalState,
    ctx: &CommandContext<'_>,
    raw_line: &str,
) -> Option<Effect> {
    let line = raw_line.trim();
    if line.is_empty() {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    let args: Vec<&str> = tokens.collect();

    state.history.push(line.to_string());
    state.history_cursor = None;

    let outcome = match state.commands.lookup(command) {
        Some(spec) => {
            tracing::debug!(command = spec.name, args = args.len(), "dispatching command");
            commands::run(spec.kind, &args, &state.commands, ctx)
        }
        None => {
            tracing::debug!(command, "unknown command");
            Outcome {
                output: format!(
                    "Command '{}' not found. Type 'help' for available commands.",
                    command
                ),
                ..Outcome::default()
            }
        }
    };

    if outcome.clear_transcript {
        state.transcript.clear();
    } else {
        state
            .transcript
            .push(TranscriptEntry::now(line, outcome.output));
    }

    state.input.clear();
    state.suggestions.clear();

    outcome.effect
}

/// Execute whatever is in the input buffer.
pub fn submit(state: &mut TerminalState, ctx: &CommandContext<'_>) -> Option<Effect> {
    let line = state.input.clone();
    execute(state, ctx, &line)
}
