//! Splitting a directive comment into label, value and justification.
//!
//! ```text
//! eslint-disable no-console, no-alert -- legacy module
//! └──── label ─┘└──── value ────────┘    └ justification ┘
//! ```
//!
//! The value is returned untouched so it can be fed to one of the value
//! parsers ([`super::parse_structured`], [`super::parse_name_value_list`],
//! [`super::parse_flag_list`]).

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Two or more dashes surrounded by whitespace.
static JUSTIFICATION_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-{2,}\s").unwrap());

/// A directive comment split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveText {
    pub label: String,
    /// Everything after the label, untrimmed.
    pub value: String,
    /// Text after the `--` separator, trimmed. Empty if absent.
    pub justification: String,
}

impl DirectiveText {
    /// Parse a comment body against a set of known labels.
    ///
    /// # Returns
    /// - `Some(DirectiveText)` if the comment starts with one of `labels`
    ///   followed by whitespace or the end of the directive part
    /// - `None` otherwise
    ///
    /// When several labels match (`eslint` and `eslint-disable`), the longest wins.
    pub fn parse<S: AsRef<str>>(text: &str, labels: &[S]) -> Option<Self> {
        let (directive, justification) = split_justification(text);

        let label: &str = labels
            .iter()
            .map(|label| label.as_ref())
            .filter(|label| strip_label(directive, label).is_some())
            .max_by_key(|label| label.len())?;

        let value = strip_label(directive, label)?;
        tracing::trace!(label, "matched directive label");

        Some(Self {
            label: label.to_string(),
            value: value.to_string(),
            justification: justification.to_string(),
        })
    }
}

/// Split off the justification at the first `--` separator.
fn split_justification(text: &str) -> (&str, &str) {
    match JUSTIFICATION_SEPARATOR_REGEX.find(text) {
        Some(m) => (text[..m.start()].trim(), text[m.end()..].trim()),
        None => (text.trim(), ""),
    }
}

/// Strip `label` from the start of `text`, requiring whitespace or end after it.
fn strip_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }
    text.strip_prefix(label)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}
