//! Span attributes and timing for search runs.
//!
//! Attribute names follow OpenTelemetry conventions so the maps can be handed
//! to an exporter unchanged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

/// Span attributes describing one search invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchSpanAttributes {
    /// Search mode name.
    pub mode: String,
    /// Source identifier.
    pub source: String,
    /// Goal identifier.
    pub goal: String,
    /// Number of pages fetched.
    pub fetches: Option<usize>,
    /// Edge count of the path found, if any.
    pub path_edges: Option<usize>,
    /// Duration in milliseconds.
    pub duration_ms: Option<f64>,
}

impl SearchSpanAttributes {
    /// Creates new search span attributes.
    #[must_use]
    pub fn new(mode: impl Into<String>, source: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            source: source.into(),
            goal: goal.into(),
            ..Default::default()
        }
    }

    /// Sets the fetch count.
    #[must_use]
    pub const fn with_fetches(mut self, fetches: usize) -> Self {
        self.fetches = Some(fetches);
        self
    }

    /// Sets the path from its node list.
    #[must_use]
    pub fn with_path(mut self, path: Option<&[String]>) -> Self {
        self.path_edges = path.map(|p| p.len().saturating_sub(1));
        self
    }

    /// Sets the duration.
    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether a path was found.
    #[must_use]
    pub const fn found(&self) -> bool {
        self.path_edges.is_some()
    }

    /// Converts to OpenTelemetry attributes.
    #[must_use]
    pub fn to_otel_attributes(&self) -> HashMap<String, String> {
        let mut attrs = HashMap::new();

        attrs.insert("search.mode".to_string(), self.mode.clone());
        attrs.insert("search.source".to_string(), self.source.clone());
        attrs.insert("search.goal".to_string(), self.goal.clone());
        attrs.insert("search.found".to_string(), self.found().to_string());

        if let Some(v) = self.fetches {
            attrs.insert("search.fetches".to_string(), v.to_string());
        }
        if let Some(v) = self.path_edges {
            attrs.insert("search.path_edges".to_string(), v.to_string());
        }
        if let Some(v) = self.duration_ms {
            attrs.insert("search.duration_ms".to_string(), v.to_string());
        }

        attrs
    }

    /// Emits the attributes as one `info` event.
    pub fn emit(&self) {
        tracing::info!(
            mode = %self.mode,
            source = %self.source,
            goal = %self.goal,
            found = self.found(),
            fetches = self.fetches,
            path_edges = self.path_edges,
            duration_ms = self.duration_ms,
            "Search finished"
        );
    }
}

/// Simple span timing helper.
#[derive(Debug)]
pub struct SpanTimer {
    start: Instant,
    name: String,
}

impl SpanTimer {
    /// Starts a new span timer.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Returns the elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Finishes the span and returns the duration.
    #[must_use]
    pub fn finish(self) -> f64 {
        let duration_ms = self.elapsed_ms();
        tracing::trace!(span = %self.name, duration_ms, "Span finished");
        duration_ms
    }
}
