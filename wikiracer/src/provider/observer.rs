//! Observability callbacks for fetch operations.

/// Callbacks fired around every page expansion.
#[cfg_attr(test, mockall::automock)]
pub trait FetchObserver: Send + Sync {
    /// Called before a page is requested.
    fn on_fetch_start(&self, identifier: &str);

    /// Called after a page was fetched and its links extracted.
    fn on_fetch_complete(&self, identifier: &str, duration_ms: f64, links_count: usize);

    /// Called when the provider failed; the page is treated as a dead end.
    fn on_fetch_error(&self, identifier: &str, error: &str);
}

/// No-op implementation of `FetchObserver`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFetchObserver;

impl FetchObserver for NoOpFetchObserver {
    fn on_fetch_start(&self, _identifier: &str) {}
    fn on_fetch_complete(&self, _identifier: &str, _duration_ms: f64, _links_count: usize) {}
    fn on_fetch_error(&self, _identifier: &str, _error: &str) {}
}

/// Observer that forwards every callback to `tracing`.
///
/// Errors are logged at `debug`; the expander already warns about them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFetchObserver;

impl FetchObserver for LoggingFetchObserver {
    fn on_fetch_start(&self, identifier: &str) {
        tracing::trace!(identifier, "Fetch started");
    }

    fn on_fetch_complete(&self, identifier: &str, duration_ms: f64, links_count: usize) {
        tracing::debug!(identifier, duration_ms, links_count, "Fetch completed");
    }

    fn on_fetch_error(&self, identifier: &str, error: &str) {
        tracing::debug!(identifier, error, "Fetch error observed");
    }
}
