//! `name` / `name:value` directive lists.
//!
//! Used for directives such as `global foo:writable, bar` or
//! `disable no-console no-alert`, where each token names something and may
//! carry a short value after a colon.

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Whitespace around a `:` or `,` separator.
static SEPARATOR_PADDING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([:,])\s*").unwrap());

/// Token boundary: a whitespace run or a comma run.
static TOKEN_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+|,+").unwrap());

/// One parsed name, with the comment it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveEntry<C> {
    /// Text after the first `:`, or `None` for a bare name.
    pub value: Option<String>,
    /// Opaque handle to the originating comment.
    pub comment: C,
}

/// Names in source order. A repeated name replaces the earlier entry.
pub type DirectiveMap<C> = IndexMap<String, DirectiveEntry<C>>;

/// Parse a whitespace- or comma-separated list of `name` / `name:value` tokens.
///
/// Never fails; empty input yields an empty map. Only the first two
/// `:`-separated pieces of a token are used, so `a:b:c` becomes `a` → `b`.
pub fn parse_name_value_list<C: Clone>(text: &str, comment: C) -> DirectiveMap<C> {
    let collapsed = SEPARATOR_PADDING_REGEX.replace_all(text, "$1");
    let mut items = DirectiveMap::new();

    for token in TOKEN_SPLIT_REGEX
        .split(&collapsed)
        .filter(|token| !token.is_empty())
    {
        let mut parts = token.split(':');
        let name = parts.next().unwrap_or_default();
        let value = parts.next().map(str::to_string);

        items.insert(
            name.to_string(),
            DirectiveEntry {
                value,
                comment: comment.clone(),
            },
        );
    }

    tracing::trace!(count = items.len(), "parsed name/value list");
    items
}
