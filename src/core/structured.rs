//! Structured (JSON-like) directive bodies.
//!
//! `/* rules no-alert: 0, semi: [2, "always"] */` carries an object literal
//! written without quotes or braces. The body is normalized first, then handed
//! to a JSON5 parser so comments, trailing commas and single quotes also work.

use serde_json::{Map, Value};

use super::normalize::normalize;
use super::types::{Diagnostic, Location, ParseOutcome};

/// Parse a directive body into a JSON object.
///
/// Parser errors never escape: they are turned into a fatal [`Diagnostic`]
/// pinned to `location`, with the trimmed input quoted in the message.
pub fn parse_structured(text: &str, location: &Location) -> ParseOutcome {
    let normalized = normalize(text);

    match json5::from_str::<Value>(&normalized) {
        Ok(Value::Null) => ParseOutcome::Success {
            config: Value::Object(Map::new()),
        },
        Ok(config) => ParseOutcome::Success { config },
        Err(err) => {
            tracing::debug!(
                line = location.start.line,
                column = location.start.column,
                error = %err,
                "failed to parse structured directive"
            );
            ParseOutcome::Failure {
                error: Diagnostic::fatal(
                    format!("Failed to parse JSON from '{}': {}", text.trim(), err),
                    location,
                ),
            }
        }
    }
}
