//! `directive` command: split a comment by label, then parse its value.

use anyhow::{Context, Result};
use serde_json::{Value, json};

use super::parse::parse_value;
use super::{CommandKind, CommandResult, CommandSummary};
use crate::config::Config;
use crate::core::{DirectiveText, Location};

pub fn directive(config: &Config, text: &str, location: &Location) -> Result<CommandResult> {
    let summary = match DirectiveText::parse(text, &config.labels.keys().collect::<Vec<_>>()) {
        None => {
            tracing::debug!("text does not start with a configured directive label");
            CommandSummary::Unrecognized
        }
        Some(parsed) => {
            let kind = config
                .kind_of(&parsed.label)
                .with_context(|| format!("No parser configured for label \"{}\"", parsed.label))?;

            match parse_value(kind, &parsed.value, location)? {
                CommandSummary::Parsed(value) => CommandSummary::Parsed(describe(&parsed, value)),
                other => other,
            }
        }
    };

    Ok(CommandResult {
        kind: CommandKind::Directive,
        summary,
        text: text.trim().to_string(),
    })
}

fn describe(parsed: &DirectiveText, value: Value) -> Value {
    json!({
        "label": parsed.label,
        "value": value,
        "justification": parsed.justification,
    })
}
