//! Tolerant-JSON normalization.
//!
//! Directive bodies are typed by hand, so they rarely look like valid JSON:
//!
//! ```text
//! no-alert: 0, semi: [2, "always"]
//! ```
//!
//! [`normalize`] rewrites that kind of text into something a JSON5 parser
//! accepts: bareword keys get quoted, one missing comma after a number or an
//! array gets restored, and the whole thing is wrapped in braces.

use regex::Regex;
use std::sync::LazyLock;

/// A bareword key (letters, digits, `-`, `/`) followed by optional whitespace and `:`.
static BAREWORD_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([-a-zA-Z0-9/]+)\s*:").unwrap());

/// A closing `]` or digit separated from the next quoted key by whitespace only.
static MISSING_COMMA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\]|[0-9])\s+""#).unwrap());

/// Rewrite a loose object body into extended-JSON text.
///
/// The bareword rewrite is a blind global substitution and will also touch
/// bareword-shaped text inside string values (`"http://x"`). The comma fix-up
/// only repairs the first gap it finds.
///
/// # Examples
///
/// ```
/// use comment_directives::core::normalize;
///
/// assert_eq!(normalize("semi: 2"), r#"{"semi": 2}"#);
/// assert_eq!(normalize("{ \"a\": 1 }"), r#"{ "a": 1 }"#);
/// ```
pub fn normalize(text: &str) -> String {
    let text = text.trim();

    let quoted = BAREWORD_KEY_REGEX.replace_all(text, "\"$1\":");
    let fixed = MISSING_COMMA_REGEX.replacen(&quoted, 1, "$1,\"");

    let mut normalized = String::with_capacity(fixed.len() + 2);
    if !fixed.starts_with('{') {
        normalized.push('{');
    }
    normalized.push_str(&fixed);
    if !fixed.ends_with('}') {
        normalized.push('}');
    }

    tracing::trace!(input = text, normalized = %normalized, "normalized directive body");
    normalized
}
