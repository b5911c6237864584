//! Page providers: the costed collaborator every search pays to expand a node.
//!
//! This module provides:
//! - The [`PageProvider`] protocol
//! - A [`RequestLog`] every provider uses to record what it served
//! - An in-memory fixture provider and an HTTP provider
//! - Fetch observability callbacks

mod log;
mod memory;
mod observer;

#[cfg(feature = "http")]
mod http;

pub use log::{FetchRecord, RequestKind, RequestLog};
pub use memory::{render_links, FixturePage, GraphFixture, InMemoryProvider};
pub use observer::{FetchObserver, LoggingFetchObserver, NoOpFetchObserver};

#[cfg(feature = "http")]
pub use http::HttpProvider;

#[cfg(test)]
pub use observer::MockFetchObserver;

use crate::errors::Result;

/// Identifier recorded for random-page requests.
pub const RANDOM_PAGE: &str = "/wiki/Special:Random";

/// Protocol for retrieving page markup.
///
/// Every call is recorded so callers can inspect exactly which pages a search
/// paid for, in order.
pub trait PageProvider: Send + Sync {
    /// Fetches the markup for `identifier`.
    fn get_page(&self, identifier: &str) -> Result<String>;

    /// Fetches the markup of some random page.
    fn get_random(&self) -> Result<String>;

    /// Every request served so far, in order.
    fn requests(&self) -> Vec<String>;
}

impl<P: PageProvider + ?Sized> PageProvider for &P {
    fn get_page(&self, identifier: &str) -> Result<String> {
        (**self).get_page(identifier)
    }

    fn get_random(&self) -> Result<String> {
        (**self).get_random()
    }

    fn requests(&self) -> Vec<String> {
        (**self).requests()
    }
}

/// Provider whose every page links only to itself.
///
/// Useful for checking that searches terminate on graphs with no path.
#[derive(Debug, Default)]
pub struct SelfLinkProvider {
    log: RequestLog,
}

impl SelfLinkProvider {
    /// Creates a new self-link provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageProvider for SelfLinkProvider {
    fn get_page(&self, identifier: &str) -> Result<String> {
        self.log.record(identifier, RequestKind::Page);
        Ok(format!(r#"<a href="{identifier}"></a>"#))
    }

    fn get_random(&self) -> Result<String> {
        self.log.record(RANDOM_PAGE, RequestKind::Random);
        Ok(format!(r#"<a href="{RANDOM_PAGE}"></a>"#))
    }

    fn requests(&self) -> Vec<String> {
        self.log.identifiers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_link_provider_records_requests() {
        let provider = SelfLinkProvider::new();
        let page = provider.get_page("/wiki/Calvin_Li").unwrap();
        assert_eq!(page, r#"<a href="/wiki/Calvin_Li"></a>"#);

        provider.get_random().unwrap();
        assert_eq!(provider.requests(), vec!["/wiki/Calvin_Li", RANDOM_PAGE]);
    }

    #[test]
    fn test_reference_forwards_to_provider() {
        let provider = SelfLinkProvider::new();
        let borrowed = &provider;
        borrowed.get_page("/wiki/A").unwrap();
        assert_eq!(provider.requests(), vec!["/wiki/A"]);
    }
}
