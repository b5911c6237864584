//! Test assertions over paths and request sequences.

use std::collections::HashSet;

use crate::links::{LinkExtractor, WikiLinkExtractor};
use crate::provider::{InMemoryProvider, RANDOM_PAGE};

/// Asserts that no page was requested twice. Random requests are ignored.
pub fn assert_no_repeat_fetches(requests: &[String]) {
    let mut seen = HashSet::new();
    for id in requests.iter().filter(|id| *id != RANDOM_PAGE) {
        assert!(
            seen.insert(id.as_str()),
            "Page '{id}' was fetched more than once: {requests:?}"
        );
    }
}

/// Asserts that `goal` was never requested.
pub fn assert_goal_never_fetched(requests: &[String], goal: &str) {
    assert!(
        !requests.iter().any(|id| id == goal),
        "Goal '{goal}' was fetched: {requests:?}"
    );
}

/// Asserts that every consecutive pair in `path` is a link in `provider`.
///
/// Reads the stored markup directly, so the provider's request log is left
/// untouched. A `[node, node]` path is accepted as the trivial route.
pub fn assert_path_connected(path: &[String], provider: &InMemoryProvider) {
    assert!(!path.is_empty(), "Path is empty");
    if path.len() == 2 && path[0] == path[1] {
        return;
    }

    let extractor = WikiLinkExtractor::new();
    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let links = provider
            .markup(from)
            .map(|html| extractor.extract_links(html))
            .unwrap_or_default();
        assert!(
            links.contains(to),
            "No link from '{from}' to '{to}' in path {path:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{two_route_graph, wiki};

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| wiki(t)).collect()
    }

    #[test]
    fn test_no_repeat_fetches_ignores_random() {
        let mut requests = ids(&["A", "B"]);
        requests.push(RANDOM_PAGE.to_string());
        requests.push(RANDOM_PAGE.to_string());
        assert_no_repeat_fetches(&requests);
    }

    #[test]
    #[should_panic(expected = "fetched more than once")]
    fn test_repeat_fetch_panics() {
        assert_no_repeat_fetches(&ids(&["A", "B", "A"]));
    }

    #[test]
    #[should_panic(expected = "was fetched")]
    fn test_goal_fetch_panics() {
        assert_goal_never_fetched(&ids(&["A", "G"]), "/wiki/G");
    }

    #[test]
    fn test_path_connected() {
        let provider = two_route_graph();
        assert_path_connected(&ids(&["S", "D", "G"]), &provider);
        assert_path_connected(&ids(&["Q", "Q"]), &provider);
    }

    #[test]
    #[should_panic(expected = "No link")]
    fn test_disconnected_path_panics() {
        assert_path_connected(&ids(&["S", "G"]), &two_route_graph());
    }
}
