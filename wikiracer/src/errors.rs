//! Error types for the wikiracer crate.
//!
//! "No path between two pages" is never an error: every search entry point
//! reports it as `None`. The variants here cover provider, configuration and
//! fixture failures.

use std::collections::HashMap;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WikiracerError>;

/// The main error type for wikiracer operations.
#[derive(Debug, Error)]
pub enum WikiracerError {
    /// The provider has no page under the requested identifier.
    #[error("Page not found: {identifier}")]
    PageNotFound {
        /// The requested identifier.
        identifier: String,
    },

    /// The provider has no pages to choose a random one from.
    #[error("No pages available for a random request")]
    EmptyProvider,

    /// The HTTP transport failed.
    #[cfg(feature = "http")]
    #[error("HTTP error fetching {identifier}: {source}")]
    Http {
        /// The requested identifier.
        identifier: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Unexpected status {status} fetching {identifier}")]
    Status {
        /// The requested identifier.
        identifier: String,
        /// HTTP status code.
        status: u16,
    },

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WikiracerError {
    /// Creates a page not found error.
    #[must_use]
    pub fn page_not_found(identifier: impl Into<String>) -> Self {
        Self::PageNotFound {
            identifier: identifier.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Short machine-readable name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PageNotFound { .. } => "PageNotFound",
            Self::EmptyProvider => "EmptyProvider",
            #[cfg(feature = "http")]
            Self::Http { .. } => "Http",
            Self::Status { .. } => "Status",
            Self::Config(_) => "Config",
            Self::Serialization(_) => "Serialization",
            Self::Io(_) => "Io",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!(self.kind()));
        match self {
            Self::PageNotFound { identifier } => {
                map.insert("identifier".to_string(), serde_json::json!(identifier));
            }
            #[cfg(feature = "http")]
            Self::Http { identifier, .. } => {
                map.insert("identifier".to_string(), serde_json::json!(identifier));
            }
            Self::Status { identifier, status } => {
                map.insert("identifier".to_string(), serde_json::json!(identifier));
                map.insert("status".to_string(), serde_json::json!(status));
            }
            _ => {}
        }
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_not_found_display() {
        let err = WikiracerError::page_not_found("/wiki/Nowhere");
        assert_eq!(err.to_string(), "Page not found: /wiki/Nowhere");
        assert_eq!(err.kind(), "PageNotFound");
    }

    #[test]
    fn test_error_to_dict() {
        let err = WikiracerError::Status {
            identifier: "/wiki/Rust".to_string(),
            status: 503,
        };
        let dict = err.to_dict();

        assert_eq!(dict.get("type").unwrap(), "Status");
        assert_eq!(dict.get("identifier").unwrap(), "/wiki/Rust");
        assert_eq!(dict.get("status").unwrap(), 503);
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: WikiracerError = parse.unwrap_err().into();
        assert_eq!(err.kind(), "Serialization");
    }
}
