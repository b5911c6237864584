//! Turning page markup into graph edges and searchable text.
//!
//! This module provides:
//! - The [`LinkExtractor`] protocol and its scraper-backed implementation
//! - The [`TextExtractor`] protocol used by find-in-page searches

mod extractor;
mod text;

pub use extractor::{LinkExtractor, WikiLinkExtractor};
pub use text::{HtmlTextExtractor, TextExtractor};
