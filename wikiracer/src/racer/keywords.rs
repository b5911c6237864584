//! Identifier tokenization, the stoplist and the useful-page list.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Low-information tokens never treated as keywords.
pub static STOPLIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "A", "a", "An", "an", "the", "The", "of", "for", "in", "on", "Main", "Page", "to", "and",
        "from", "by", "ISBN", "disambiguation",
    ]
    .into_iter()
    .collect()
});

/// Titles of broadly linked pages, one per line in `data/useful_pages.txt`.
pub static USEFUL_PAGES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("../../data/useful_pages.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Splits an identifier into title words.
///
/// The `marker` prefix is stripped and parentheses dropped before splitting
/// on underscores and slashes. Empty pieces are skipped.
#[must_use]
pub fn tokenize(identifier: &str, marker: &str) -> Vec<String> {
    let title = identifier.replace(marker, "").replace(['(', ')'], "");
    title
        .split(['_', '/'])
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `token` is on the stoplist.
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPLIST.contains(token)
}

/// Tokens shared by both identifier lists, minus the stoplist.
#[must_use]
pub fn keyword_set(source_side: &[String], goal_side: &[String], marker: &str) -> HashSet<String> {
    let words = |ids: &[String]| -> HashSet<String> {
        ids.iter().flat_map(|id| tokenize(id, marker)).collect()
    };
    let goal_words = words(goal_side);

    words(source_side)
        .into_iter()
        .filter(|token| goal_words.contains(token) && !is_stopword(token))
        .collect()
}

/// Whether `identifier` names a page on the useful-page list.
#[must_use]
pub fn is_useful(identifier: &str, marker: &str) -> bool {
    identifier
        .strip_prefix(marker)
        .is_some_and(|title| USEFUL_PAGES.contains(title))
}
