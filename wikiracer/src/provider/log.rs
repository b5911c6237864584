//! Request recording shared by all providers.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// What kind of request was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// A named page.
    Page,
    /// A random page.
    Random,
}

/// One served request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRecord {
    /// Requested identifier (the random marker for random requests).
    pub identifier: String,
    /// Request kind.
    pub kind: RequestKind,
    /// When the request was served.
    pub fetched_at: DateTime<Utc>,
}

/// Append-only, thread-safe log of served requests.
#[derive(Debug, Default)]
pub struct RequestLog {
    records: Mutex<Vec<FetchRecord>>,
}

impl RequestLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request.
    pub fn record(&self, identifier: &str, kind: RequestKind) {
        self.records.lock().push(FetchRecord {
            identifier: identifier.to_string(),
            kind,
            fetched_at: Utc::now(),
        });
    }

    /// Requested identifiers, in order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.identifier.clone())
            .collect()
    }

    /// Full records, in order.
    #[must_use]
    pub fn records(&self) -> Vec<FetchRecord> {
        self.records.lock().clone()
    }

    /// Number of requests served.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been served.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_order() {
        let log = RequestLog::new();
        assert!(log.is_empty());

        log.record("/wiki/B", RequestKind::Page);
        log.record("/wiki/A", RequestKind::Page);
        log.record("/wiki/Special:Random", RequestKind::Random);

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.identifiers(),
            vec!["/wiki/B", "/wiki/A", "/wiki/Special:Random"]
        );
        assert_eq!(log.records()[2].kind, RequestKind::Random);
        assert!(log.records()[0].fetched_at <= log.records()[1].fetched_at);
    }

    #[test]
    fn test_record_serializes() {
        let log = RequestLog::new();
        log.record("/wiki/A", RequestKind::Random);
        let json = serde_json::to_value(&log.records()[0]).unwrap();
        assert_eq!(json["kind"], "random");
        assert_eq!(json["identifier"], "/wiki/A");
    }
}
