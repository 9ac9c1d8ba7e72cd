//! Shared data types for directive parsing results.

use serde::Serialize;
use serde_json::Value;

/// Severity code carried by fatal parse diagnostics.
pub const SEVERITY_ERROR: u8 = 2;

/// Line/column pair as reported by the comment scanner.
///
/// Lines are 1-based, columns are 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Source location of the comment a directive was read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub start: Position,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            start: Position { line, column },
        }
    }
}

/// A fatal diagnostic produced when a directive body cannot be parsed.
///
/// The serialized shape is fixed:
/// `{"ruleId":null,"fatal":true,"severity":2,"message":..,"line":..,"column":..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub rule_id: Option<String>,
    pub fatal: bool,
    pub severity: u8,
    pub message: String,
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

impl Diagnostic {
    /// Build a fatal diagnostic pinned to the start of `location`.
    ///
    /// The column is shifted by one to make it 1-based.
    pub fn fatal(message: impl Into<String>, location: &Location) -> Self {
        Self {
            rule_id: None,
            fatal: true,
            severity: SEVERITY_ERROR,
            message: message.into(),
            line: location.start.line,
            column: location.start.column.saturating_add(1),
        }
    }
}

/// Result of parsing a structured (JSON-like) directive body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Success { config: Value },
    Failure { error: Diagnostic },
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The parsed object, if parsing succeeded.
    pub fn config(&self) -> Option<&Value> {
        match self {
            Self::Success { config } => Some(config),
            Self::Failure { .. } => None,
        }
    }

    /// The diagnostic, if parsing failed.
    pub fn error(&self) -> Option<&Diagnostic> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}
