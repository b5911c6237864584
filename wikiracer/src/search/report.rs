//! Serializable summary of one search run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::PageProvider;

/// What a search found and what it paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Mode name (`bfs`, `dfs`, `dijkstra`, `race` or `find`).
    pub mode: String,
    /// Source identifier.
    pub source: String,
    /// Goal identifier, or the query for find-in-page.
    pub goal: String,
    /// Path found, if any.
    pub path: Option<Vec<String>>,
    /// Every provider request, in order.
    pub requests: Vec<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: f64,
    /// When the report was produced.
    pub finished_at: DateTime<Utc>,
}

impl SearchReport {
    /// Builds a report, reading the request sequence from `provider`.
    #[must_use]
    pub fn new(
        mode: impl Into<String>,
        source: impl Into<String>,
        goal: impl Into<String>,
        path: Option<Vec<String>>,
        provider: &dyn PageProvider,
        duration_ms: f64,
    ) -> Self {
        Self {
            mode: mode.into(),
            source: source.into(),
            goal: goal.into(),
            path,
            requests: provider.requests(),
            duration_ms,
            finished_at: Utc::now(),
        }
    }

    /// Whether a path was found.
    #[must_use]
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of provider requests.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.requests.len()
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
