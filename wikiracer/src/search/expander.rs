//! The single place pages are paid for.

use crate::links::LinkExtractor;
use crate::observability::SpanTimer;
use crate::provider::{FetchObserver, PageProvider, RANDOM_PAGE};

/// Fetches pages and turns them into neighbor lists.
///
/// Provider failures never escape: they are reported to the observer and the
/// page is treated as having no outgoing links.
pub struct Expander<'a> {
    provider: &'a dyn PageProvider,
    extractor: &'a dyn LinkExtractor,
    observer: &'a dyn FetchObserver,
    fetches: usize,
}

impl<'a> Expander<'a> {
    /// Creates an expander over the given collaborators.
    #[must_use]
    pub fn new(
        provider: &'a dyn PageProvider,
        extractor: &'a dyn LinkExtractor,
        observer: &'a dyn FetchObserver,
    ) -> Self {
        Self {
            provider,
            extractor,
            observer,
            fetches: 0,
        }
    }

    /// Number of provider calls made through this expander.
    #[must_use]
    pub const fn fetches(&self) -> usize {
        self.fetches
    }

    /// Fetches `identifier` and returns its markup and outgoing links.
    ///
    /// The markup is `None` when the provider failed.
    pub fn expand_page(&mut self, identifier: &str) -> (Option<String>, Vec<String>) {
        self.fetch_with(identifier, |provider| provider.get_page(identifier))
    }

    /// Fetches `identifier` and returns its outgoing links.
    pub fn neighbors(&mut self, identifier: &str) -> Vec<String> {
        self.expand_page(identifier).1
    }

    /// Fetches a random page and returns its outgoing links.
    pub fn random_neighbors(&mut self) -> Vec<String> {
        self.fetch_with(RANDOM_PAGE, |provider| provider.get_random()).1
    }

    fn fetch_with<F>(&mut self, label: &str, fetch: F) -> (Option<String>, Vec<String>)
    where
        F: FnOnce(&dyn PageProvider) -> crate::errors::Result<String>,
    {
        self.fetches += 1;
        self.observer.on_fetch_start(label);
        let timer = SpanTimer::start(label);

        match fetch(self.provider) {
            Ok(markup) => {
                let links = self.extractor.extract_links(&markup);
                self.observer
                    .on_fetch_complete(label, timer.finish(), links.len());
                (Some(markup), links)
            }
            Err(err) => {
                tracing::warn!(identifier = label, error = ?err.to_dict(), "Fetch failed");
                self.observer.on_fetch_error(label, &err.to_string());
                (None, Vec::new())
            }
        }
    }
}
