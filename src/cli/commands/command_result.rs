use serde_json::Value;

use super::super::exit_status::ExitStatus;
use crate::core::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Json,
    List,
    Flags,
    Directive,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    /// Parsed value, printed as JSON.
    Parsed(Value),
    /// Structured text that failed to parse.
    Failed(Diagnostic),
    /// Text does not start with any configured directive label.
    Unrecognized,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// The input text, trimmed. Empty for `init`.
    pub text: String,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Parsed(_) => ExitStatus::Success,
            CommandSummary::Failed(_) | CommandSummary::Unrecognized => ExitStatus::Failure,
            CommandSummary::Init(InitSummary { created: true }) => ExitStatus::Success,
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        }
    }
}
