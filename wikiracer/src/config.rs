//! Configuration types for fetching, link filtering and the racer heuristics.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::{Result, WikiracerError};

/// Configuration for HTTP fetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchConfig {
    /// Origin that page identifiers are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Identifier requested for a random page.
    #[serde(default = "default_random_path")]
    pub random_path: String,
}

fn default_base_url() -> String {
    "https://en.wikipedia.org".to_string()
}

fn default_timeout() -> f64 {
    30.0
}

fn default_user_agent() -> String {
    "wikiracer/0.1".to_string()
}

fn default_random_path() -> String {
    crate::provider::RANDOM_PAGE.to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            random_path: default_random_path(),
        }
    }
}

impl FetchConfig {
    /// Creates a new fetch configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Gets timeout as Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_seconds.max(0.0))
    }

    /// Full URL for a page identifier.
    #[must_use]
    pub fn url_for(&self, identifier: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), identifier)
    }
}

/// Which anchor targets count as graph edges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkFilterConfig {
    /// Substring every node identifier must contain.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Characters that disqualify an identifier once the marker is removed.
    #[serde(default = "default_disallowed")]
    pub disallowed: Vec<char>,
}

fn default_marker() -> String {
    "/wiki/".to_string()
}

fn default_disallowed() -> Vec<char> {
    vec![':', '#', '/', '?']
}

impl Default for LinkFilterConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            disallowed: default_disallowed(),
        }
    }
}

impl LinkFilterConfig {
    /// Creates a new filter configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a disallowed character.
    #[must_use]
    pub fn with_disallowed(mut self, c: char) -> Self {
        if !self.disallowed.contains(&c) {
            self.disallowed.push(c);
        }
        self
    }
}

/// Bounds on the racer's goal-side exploration.
///
/// The defaults were tuned against encyclopedia-sized fan-out; graphs with a
/// very different degree distribution may want other values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RacerConfig {
    /// Stop once the source/goal-neighborhood overlap exceeds this.
    #[serde(default = "default_overlap_threshold")]
    pub overlap_threshold: usize,
    /// First guard tier: pending goal-side queue length.
    #[serde(default = "default_narrow_queue")]
    pub narrow_queue_limit: usize,
    /// First guard tier: accumulated link total.
    #[serde(default = "default_narrow_total")]
    pub narrow_total_limit: usize,
    /// Second guard tier: pending goal-side queue length.
    #[serde(default = "default_wide_queue")]
    pub wide_queue_limit: usize,
    /// Second guard tier: accumulated link total.
    #[serde(default = "default_wide_total")]
    pub wide_total_limit: usize,
}

/// Default overlap threshold.
pub const OVERLAP_THRESHOLD: usize = 5;
/// Default first-tier queue limit.
pub const NARROW_QUEUE_LIMIT: usize = 200;
/// Default first-tier accumulated-link limit.
pub const NARROW_TOTAL_LIMIT: usize = 5_000;
/// Default second-tier queue limit.
pub const WIDE_QUEUE_LIMIT: usize = 50;
/// Default second-tier accumulated-link limit.
pub const WIDE_TOTAL_LIMIT: usize = 10_000;

const fn default_overlap_threshold() -> usize {
    OVERLAP_THRESHOLD
}

const fn default_narrow_queue() -> usize {
    NARROW_QUEUE_LIMIT
}

const fn default_narrow_total() -> usize {
    NARROW_TOTAL_LIMIT
}

const fn default_wide_queue() -> usize {
    WIDE_QUEUE_LIMIT
}

const fn default_wide_total() -> usize {
    WIDE_TOTAL_LIMIT
}

impl Default for RacerConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: OVERLAP_THRESHOLD,
            narrow_queue_limit: NARROW_QUEUE_LIMIT,
            narrow_total_limit: NARROW_TOTAL_LIMIT,
            wide_queue_limit: WIDE_QUEUE_LIMIT,
            wide_total_limit: WIDE_TOTAL_LIMIT,
        }
    }
}

impl RacerConfig {
    /// Creates a new racer configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overlap threshold.
    #[must_use]
    pub fn with_overlap_threshold(mut self, threshold: usize) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    /// Whether the fetch-budget guard has tripped.
    #[must_use]
    pub const fn budget_exhausted(&self, queue_len: usize, total: usize) -> bool {
        (queue_len > self.narrow_queue_limit && total > self.narrow_total_limit)
            || (queue_len > self.wide_queue_limit && total > self.wide_total_limit)
    }
}

/// Bounds on the find-in-page walk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FindInPageConfig {
    /// Maximum number of pages expanded before giving up.
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

const fn default_max_expansions() -> usize {
    500
}

impl Default for FindInPageConfig {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
        }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WikiracerConfig {
    /// Fetch configuration.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Link filter configuration.
    #[serde(default)]
    pub links: LinkFilterConfig,
    /// Racer configuration.
    #[serde(default)]
    pub racer: RacerConfig,
    /// Find-in-page configuration.
    #[serde(default)]
    pub find_in_page: FindInPageConfig,
}

impl WikiracerConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks values serde cannot check.
    pub fn validate(&self) -> Result<()> {
        if self.links.marker.is_empty() {
            return Err(WikiracerError::config("links.marker must not be empty"));
        }
        if !self.fetch.timeout_seconds.is_finite() || self.fetch.timeout_seconds <= 0.0 {
            return Err(WikiracerError::config(format!(
                "fetch.timeout_seconds must be positive, got {}",
                self.fetch.timeout_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, "https://en.wikipedia.org");
        assert_eq!(config.timeout_seconds, 30.0);
        assert_eq!(config.random_path, "/wiki/Special:Random");
    }

    #[test]
    fn test_fetch_config_builder() {
        let config = FetchConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_timeout(5.0)
            .with_user_agent("racer-test");

        assert_eq!(config.url_for("/wiki/Rust"), "http://localhost:8080/wiki/Rust");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent, "racer-test");
    }

    #[test]
    fn test_link_filter_defaults() {
        let config = LinkFilterConfig::default();
        assert_eq!(config.marker, "/wiki/");
        assert_eq!(config.disallowed, vec![':', '#', '/', '?']);

        let config = config.with_disallowed('%').with_disallowed('%');
        assert_eq!(config.disallowed.len(), 5);
    }

    #[test]
    fn test_racer_budget_tiers() {
        let config = RacerConfig::default();

        assert!(!config.budget_exhausted(10, 100_000));
        assert!(!config.budget_exhausted(201, 5_000));
        assert!(config.budget_exhausted(201, 5_001));
        assert!(!config.budget_exhausted(51, 10_000));
        assert!(config.budget_exhausted(51, 10_001));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            WikiracerConfig::from_json_str(r#"{"racer": {"overlap_threshold": 2}}"#).unwrap();

        assert_eq!(config.racer.overlap_threshold, 2);
        assert_eq!(config.racer.wide_total_limit, WIDE_TOTAL_LIMIT);
        assert_eq!(config.fetch, FetchConfig::default());
        assert_eq!(config.find_in_page.max_expansions, 500);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = WikiracerConfig::from_json_str(r#"{"links": {"marker": ""}}"#).unwrap_err();
        assert_eq!(err.kind(), "Config");

        let err =
            WikiracerConfig::from_json_str(r#"{"fetch": {"timeout_seconds": 0}}"#).unwrap_err();
        assert_eq!(err.kind(), "Config");
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fetch": {{"user_agent": "from-file"}}}}"#).unwrap();

        let config = WikiracerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.fetch.user_agent, "from-file");
    }
}
