//! Anchor extraction and identifier filtering.

use scraper::{ElementRef, Html};
use std::collections::HashSet;

use crate::config::LinkFilterConfig;

/// Protocol for turning markup into outgoing node identifiers.
///
/// Implementations must return identifiers in first-occurrence order with
/// duplicates removed. Markup that cannot be parsed yields an empty list.
pub trait LinkExtractor: Send + Sync {
    /// Extracts the outgoing identifiers referenced by `markup`.
    fn extract_links(&self, markup: &str) -> Vec<String>;
}

/// Extracts `href` targets of `<a>` elements that look like article links.
#[derive(Debug, Clone, Default)]
pub struct WikiLinkExtractor {
    config: LinkFilterConfig,
}

impl WikiLinkExtractor {
    /// Creates an extractor with the default filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with a custom filter.
    #[must_use]
    pub const fn with_config(config: LinkFilterConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    #[must_use]
    pub const fn config(&self) -> &LinkFilterConfig {
        &self.config
    }

    /// Whether `href` names a node under this filter.
    #[must_use]
    pub fn is_valid(&self, href: &str) -> bool {
        if !href.contains(self.config.marker.as_str()) {
            return false;
        }
        let title = href.replace(self.config.marker.as_str(), "");
        !title.chars().any(|c| self.config.disallowed.contains(&c))
    }

    /// Every `href` in document order, unfiltered.
    fn hrefs(markup: &str) -> Vec<String> {
        let document = Html::parse_document(markup);
        document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "a")
            .filter_map(|el| el.value().attr("href"))
            .map(String::from)
            .collect()
    }
}

impl LinkExtractor for WikiLinkExtractor {
    fn extract_links(&self, markup: &str) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut links = Vec::new();

        for href in Self::hrefs(markup) {
            if !self.is_valid(&href) {
                continue;
            }
            if seen.insert(href.clone()) {
                links.push(href);
            }
        }

        links
    }
}
