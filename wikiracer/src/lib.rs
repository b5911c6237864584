//! # Wikiracer
//!
//! Path search over an encyclopedia whose links are only revealed by
//! fetching pages.
//!
//! Every page fetch is the expensive operation, so the crate counts and
//! records them. It provides:
//!
//! - **Frontier search**: breadth-first, depth-first and uniform-cost search
//!   sharing one expansion loop
//! - **Heuristic routing**: probes both endpoints and a random page, then
//!   runs a weighted search with tiered edge costs
//! - **Find-in-page**: breadth-first search for a page containing a query
//! - **Providers**: in-memory fixtures and a blocking HTTP client
//!
//! ## Quick Start
//!
//! ```rust
//! use wikiracer::prelude::*;
//!
//! let provider = InMemoryProvider::from_links([
//!     ("/wiki/Rust", vec!["/wiki/Mozilla"]),
//!     ("/wiki/Mozilla", vec!["/wiki/Firefox"]),
//! ]);
//! let engine = SearchEngine::new(&provider);
//!
//! let path = engine.bfs("/wiki/Rust", "/wiki/Firefox");
//! assert_eq!(
//!     path,
//!     Some(vec![
//!         "/wiki/Rust".to_string(),
//!         "/wiki/Mozilla".to_string(),
//!         "/wiki/Firefox".to_string(),
//!     ])
//! );
//! assert_eq!(provider.requests(), vec!["/wiki/Rust", "/wiki/Mozilla"]);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod links;
pub mod observability;
pub mod provider;
pub mod racer;
pub mod search;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{
        FetchConfig, FindInPageConfig, LinkFilterConfig, RacerConfig, WikiracerConfig,
    };
    pub use crate::errors::{Result, WikiracerError};
    pub use crate::links::{HtmlTextExtractor, LinkExtractor, TextExtractor, WikiLinkExtractor};
    pub use crate::provider::{
        FetchObserver, GraphFixture, InMemoryProvider, LoggingFetchObserver, NoOpFetchObserver,
        PageProvider, SelfLinkProvider,
    };
    #[cfg(feature = "http")]
    pub use crate::provider::HttpProvider;
    pub use crate::racer::WikiRacer;
    pub use crate::search::{CostFn, SearchEngine, SearchMode, SearchOutcome, SearchReport};
}
