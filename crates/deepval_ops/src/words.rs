//! Splitting identifiers into lowercase words.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-\s]+").expect("valid regex"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^A-Z])([A-Z])").expect("valid regex"));
static ACRONYM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex")
});

/// Splits camelCase, PascalCase, snake_case and kebab-case identifiers
/// into lowercase words.
///
/// Acronyms stay together: `"XMLHttpRequest"` yields
/// `["xml", "http", "request"]`.
#[must_use]
pub fn split_words(input: &str) -> Vec<String> {
    let spaced = SEPARATORS.replace_all(input, " ");
    let spaced = LOWER_UPPER.replace_all(&spaced, "$1 $2");
    let spaced = ACRONYM.replace_all(&spaced, "$1 $2");
    spaced
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
