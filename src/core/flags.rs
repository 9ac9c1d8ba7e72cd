//! Comma-separated flag lists, e.g. `env browser, node`.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static COMMA_PADDING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

static COMMA_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",+").unwrap());

/// Set of names, each mapped to `true`.
pub type FlagSet = IndexMap<String, bool>;

/// Parse a comma-separated list of names into a [`FlagSet`].
///
/// Never fails; duplicates collapse and empty items are skipped.
///
/// ```
/// use comment_directives::core::parse_flag_list;
///
/// let flags = parse_flag_list("browser, node ,, mocha");
/// assert_eq!(flags.keys().collect::<Vec<_>>(), ["browser", "node", "mocha"]);
/// ```
pub fn parse_flag_list(text: &str) -> FlagSet {
    let collapsed = COMMA_PADDING_REGEX.replace_all(text, ",");

    let flags: FlagSet = COMMA_SPLIT_REGEX
        .split(&collapsed)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| (name.to_string(), true))
        .collect();

    tracing::trace!(count = flags.len(), "parsed flag list");
    flags
}
