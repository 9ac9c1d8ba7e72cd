//! `json`, `list` and `flags` commands.

use anyhow::{Context, Result};

use super::{CommandKind, CommandResult, CommandSummary};
use crate::config::ValueKind;
use crate::core::{Location, ParseOutcome, parse_flag_list, parse_name_value_list, parse_structured};

/// Run one of the value parsers over `text`.
///
/// List entries carry `location` as their provenance.
pub fn parse_value(kind: ValueKind, text: &str, location: &Location) -> Result<CommandSummary> {
    tracing::debug!(%kind, line = location.start.line, "parsing directive value");

    let summary = match kind {
        ValueKind::Structured => match parse_structured(text, location) {
            ParseOutcome::Success { config } => CommandSummary::Parsed(config),
            ParseOutcome::Failure { error } => CommandSummary::Failed(error),
        },
        ValueKind::List => {
            let map = parse_name_value_list(text, *location);
            CommandSummary::Parsed(
                serde_json::to_value(&map).context("Failed to serialize directive map")?,
            )
        }
        ValueKind::Flags => {
            let flags = parse_flag_list(text);
            CommandSummary::Parsed(
                serde_json::to_value(&flags).context("Failed to serialize flag set")?,
            )
        }
    };

    Ok(summary)
}

pub fn parse(kind: ValueKind, text: &str, location: &Location) -> Result<CommandResult> {
    let command_kind = match kind {
        ValueKind::Structured => CommandKind::Json,
        ValueKind::List => CommandKind::List,
        ValueKind::Flags => CommandKind::Flags,
    };

    Ok(CommandResult {
        kind: command_kind,
        summary: parse_value(kind, text, location)?,
        text: text.trim().to_string(),
    })
}
