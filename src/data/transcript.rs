//! Transcript records kept by the terminal.

/// One executed command and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// The trimmed input line, as typed.
    pub command_text: String,
    /// `None` for commands that print nothing.
    pub output: Option<String>,
    /// Local wall-clock time at capture, for display only.
    pub timestamp: String,
}

impl TranscriptEntry {
    /// Record an entry stamped with the current local time.
    pub fn now(command_text: impl Into<String>, output: impl Into<String>) -> Self {
        let output = output.into();
        Self {
            command_text: command_text.into(),
            output: (!output.is_empty()).then_some(output),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}
