//! Provider and observer doubles.

use parking_lot::Mutex;
use std::collections::HashSet;

use crate::errors::{Result, WikiracerError};
use crate::provider::{FetchObserver, InMemoryProvider, PageProvider, RequestKind};

/// Wraps an [`InMemoryProvider`] and fails selected pages with a 503.
///
/// Failed requests are still recorded.
#[derive(Debug)]
pub struct FailingProvider {
    inner: InMemoryProvider,
    failing: HashSet<String>,
}

impl FailingProvider {
    /// Creates a provider failing every identifier in `failing`.
    #[must_use]
    pub fn new<I, S>(inner: InMemoryProvider, failing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner,
            failing: failing.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageProvider for FailingProvider {
    fn get_page(&self, identifier: &str) -> Result<String> {
        if self.failing.contains(identifier) {
            self.inner.log().record(identifier, RequestKind::Page);
            return Err(WikiracerError::Status {
                identifier: identifier.to_string(),
                status: 503,
            });
        }
        self.inner.get_page(identifier)
    }

    fn get_random(&self) -> Result<String> {
        self.inner.get_random()
    }

    fn requests(&self) -> Vec<String> {
        self.inner.requests()
    }
}

/// Observer that counts callbacks.
#[derive(Debug, Default)]
pub struct CountingObserver {
    counts: Mutex<ObserverCounts>,
}

/// Callback totals seen by a [`CountingObserver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObserverCounts {
    /// `on_fetch_start` calls.
    pub started: usize,
    /// `on_fetch_complete` calls.
    pub completed: usize,
    /// `on_fetch_error` calls.
    pub failed: usize,
    /// Links reported across completed fetches.
    pub links: usize,
}

impl CountingObserver {
    /// Creates an observer with zeroed counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current totals.
    #[must_use]
    pub fn counts(&self) -> ObserverCounts {
        *self.counts.lock()
    }
}

impl FetchObserver for CountingObserver {
    fn on_fetch_start(&self, _identifier: &str) {
        self.counts.lock().started += 1;
    }

    fn on_fetch_complete(&self, _identifier: &str, _duration_ms: f64, link_count: usize) {
        let mut counts = self.counts.lock();
        counts.completed += 1;
        counts.links += link_count;
    }

    fn on_fetch_error(&self, _identifier: &str, _error: &str) {
        self.counts.lock().failed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestGraph;

    #[test]
    fn test_failing_provider_records_failures() {
        let provider = FailingProvider::new(TestGraph::new().edge("A", "B").build(), ["/wiki/A"]);

        let err = provider.get_page("/wiki/A").unwrap_err();
        assert_eq!(err.kind(), "Status");
        assert!(provider.get_page("/wiki/B").is_err());
        assert_eq!(provider.requests(), vec!["/wiki/A", "/wiki/B"]);
    }

    #[test]
    fn test_counting_observer() {
        let observer = CountingObserver::new();
        observer.on_fetch_start("/wiki/A");
        observer.on_fetch_complete("/wiki/A", 1.0, 3);
        observer.on_fetch_error("/wiki/B", "boom");

        assert_eq!(
            observer.counts(),
            ObserverCounts {
                started: 1,
                completed: 1,
                failed: 1,
                links: 3,
            }
        );
    }
}
