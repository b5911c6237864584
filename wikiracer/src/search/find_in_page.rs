//! Breadth-first search for a page whose text matches a query.

use std::collections::{HashSet, VecDeque};

use super::engine::SearchEngine;
use super::frontier::FrontierEntry;
use crate::config::FindInPageConfig;
use crate::observability::{SearchSpanAttributes, SpanTimer};

/// Splits a query into the lowercase tokens a page must contain.
#[must_use]
pub fn query_tokens(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

impl SearchEngine<'_> {
    /// Walks outward from `source` until a page contains every token of
    /// `query`, returning the path to that page.
    ///
    /// An empty query matches `source` without fetching it. At most
    /// `config.max_expansions` pages are fetched.
    pub fn find_in_page(
        &self,
        source: &str,
        query: &str,
        config: &FindInPageConfig,
    ) -> Option<Vec<String>> {
        let timer = SpanTimer::start("find_in_page");
        let tokens = query_tokens(query);
        let mut expander = self.expander();

        let path = if tokens.is_empty() {
            Some(vec![source.to_string()])
        } else {
            let mut queue = VecDeque::from([FrontierEntry::root(source)]);
            let mut visited: HashSet<String> = HashSet::new();
            let mut found = None;

            while let Some(entry) = queue.pop_front() {
                if expander.fetches() >= config.max_expansions {
                    tracing::info!(
                        source,
                        query,
                        max_expansions = config.max_expansions,
                        "Find-in-page budget exhausted"
                    );
                    break;
                }
                if !visited.insert(entry.node.clone()) {
                    continue;
                }

                let (markup, links) = expander.expand_page(&entry.node);
                if markup.is_some_and(|m| self.text_extractor().contains_all(&m, &tokens)) {
                    found = Some(entry.path);
                    break;
                }
                for link in links {
                    if !visited.contains(&link) {
                        queue.push_back(entry.child(&link, entry.cost + 1.0));
                    }
                }
            }
            found
        };

        SearchSpanAttributes::new("find", source, query)
            .with_fetches(expander.fetches())
            .with_path(path.as_deref())
            .with_duration_ms(timer.finish())
            .emit();
        path
    }
}
