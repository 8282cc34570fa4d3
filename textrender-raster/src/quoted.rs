//! Double-quoted text extraction.

use std::sync::LazyLock;

use regex::Regex;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("quoted-text pattern is valid"));

/// All `"…"` substrings in order, separated by a blank line.
///
/// No quotes at all yields an empty string.
pub fn extract_quoted(text: &str) -> String {
    QUOTED
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
