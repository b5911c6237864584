//! In-memory provider backed by fixture pages.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::log::{RequestKind, RequestLog};
use super::{PageProvider, RANDOM_PAGE};
use crate::errors::{Result, WikiracerError};

/// A fixture page: either raw markup or a list of outgoing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixturePage {
    /// Outgoing identifiers, rendered as anchors.
    Links(Vec<String>),
    /// Raw markup served verbatim.
    Markup(String),
}

/// A serializable set of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFixture {
    /// Seed for random-page selection.
    #[serde(default)]
    pub seed: u64,
    /// Page served for every random request, instead of a seeded pick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<String>,
    /// Pages keyed by identifier.
    #[serde(default)]
    pub pages: BTreeMap<String, FixturePage>,
}

impl GraphFixture {
    /// Parses a fixture from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a fixture from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Renders outgoing identifiers as a minimal page of anchors.
#[must_use]
pub fn render_links<S: AsRef<str>>(links: &[S]) -> String {
    let mut html = String::from("<html><body>");
    for link in links {
        let href = link.as_ref().replace('&', "&amp;").replace('"', "&quot;");
        html.push_str(&format!(r#"<a href="{href}">{href}</a>"#));
    }
    html.push_str("</body></html>");
    html
}

/// Provider serving pages from memory.
///
/// Unknown identifiers produce [`WikiracerError::PageNotFound`] after being
/// recorded, so they still count as a paid request.
#[derive(Debug)]
pub struct InMemoryProvider {
    pages: BTreeMap<String, String>,
    rng: Mutex<StdRng>,
    pinned_random: Option<String>,
    log: RequestLog,
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: BTreeMap::new(),
            rng: Mutex::new(StdRng::seed_from_u64(0)),
            pinned_random: None,
            log: RequestLog::new(),
        }
    }

    /// Builds a provider from adjacency lists.
    #[must_use]
    pub fn from_links<I, K, L, S>(graph: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        graph
            .into_iter()
            .fold(Self::new(), |provider, (id, links)| provider.with_links(id, links))
    }

    /// Builds a provider from a fixture.
    #[must_use]
    pub fn from_fixture(fixture: GraphFixture) -> Self {
        let mut provider = Self::new().with_seed(fixture.seed);
        provider.pinned_random = fixture.random;
        for (id, page) in fixture.pages {
            provider = match page {
                FixturePage::Links(links) => provider.with_links(id, links),
                FixturePage::Markup(markup) => provider.with_page(id, markup),
            };
        }
        provider
    }

    /// Adds a page with raw markup.
    #[must_use]
    pub fn with_page(mut self, identifier: impl Into<String>, markup: impl Into<String>) -> Self {
        self.pages.insert(identifier.into(), markup.into());
        self
    }

    /// Adds a page linking to `links`.
    #[must_use]
    pub fn with_links<L, S>(self, identifier: impl Into<String>, links: L) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links: Vec<String> = links.into_iter().map(Into::into).collect();
        self.with_page(identifier, render_links(&links))
    }

    /// Reseeds random-page selection.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
        self
    }

    /// Serves `identifier` for every random request.
    #[must_use]
    pub fn with_random_page(mut self, identifier: impl Into<String>) -> Self {
        self.pinned_random = Some(identifier.into());
        self
    }

    /// Markup stored for `identifier`, without recording a request.
    #[must_use]
    pub fn markup(&self, identifier: &str) -> Option<&str> {
        self.pages.get(identifier).map(String::as_str)
    }

    /// Number of pages served by this provider.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The underlying request log.
    #[must_use]
    pub const fn log(&self) -> &RequestLog {
        &self.log
    }
}

impl PageProvider for InMemoryProvider {
    fn get_page(&self, identifier: &str) -> Result<String> {
        self.log.record(identifier, RequestKind::Page);
        self.pages
            .get(identifier)
            .cloned()
            .ok_or_else(|| WikiracerError::page_not_found(identifier))
    }

    fn get_random(&self) -> Result<String> {
        self.log.record(RANDOM_PAGE, RequestKind::Random);
        if let Some(identifier) = &self.pinned_random {
            return self
                .pages
                .get(identifier)
                .cloned()
                .ok_or_else(|| WikiracerError::page_not_found(identifier.as_str()));
        }
        if self.pages.is_empty() {
            return Err(WikiracerError::EmptyProvider);
        }
        let index = self.rng.lock().gen_range(0..self.pages.len());
        self.pages
            .values()
            .nth(index)
            .cloned()
            .ok_or(WikiracerError::EmptyProvider)
    }

    fn requests(&self) -> Vec<String> {
        self.log.identifiers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{LinkExtractor, WikiLinkExtractor};
    use std::io::Write;

    #[test]
    fn test_from_links_round_trips_through_extractor() {
        let provider =
            InMemoryProvider::from_links([("/wiki/A", vec!["/wiki/B", "/wiki/C_(film)"])]);
        let html = provider.get_page("/wiki/A").unwrap();

        let links = WikiLinkExtractor::new().extract_links(&html);
        assert_eq!(links, vec!["/wiki/B", "/wiki/C_(film)"]);
    }

    #[test]
    fn test_unknown_page_is_recorded_and_errors() {
        let provider = InMemoryProvider::new();
        let err = provider.get_page("/wiki/Missing").unwrap_err();

        assert_eq!(err.kind(), "PageNotFound");
        assert_eq!(provider.requests(), vec!["/wiki/Missing"]);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let build = || {
            InMemoryProvider::from_links([
                ("/wiki/A", vec!["/wiki/B"]),
                ("/wiki/B", vec!["/wiki/C"]),
                ("/wiki/C", vec!["/wiki/A"]),
            ])
            .with_seed(7)
        };
        let first = build();
        let second = build();

        let a: Vec<String> = (0..5).map(|_| first.get_random().unwrap()).collect();
        let b: Vec<String> = (0..5).map(|_| second.get_random().unwrap()).collect();
        assert_eq!(a, b);
        assert_eq!(first.requests(), vec![RANDOM_PAGE; 5]);
    }

    #[test]
    fn test_pinned_random_page() {
        let provider = InMemoryProvider::from_links([
            ("/wiki/A", vec!["/wiki/B"]),
            ("/wiki/B", vec!["/wiki/C"]),
        ])
        .with_random_page("/wiki/B");

        for _ in 0..3 {
            assert_eq!(
                provider.get_random().unwrap(),
                provider.get_page("/wiki/B").unwrap()
            );
        }
    }

    #[test]
    fn test_random_on_empty_provider() {
        let provider = InMemoryProvider::new();
        assert!(matches!(
            provider.get_random(),
            Err(WikiracerError::EmptyProvider)
        ));
    }

    #[test]
    fn test_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"seed": 3, "random": "/wiki/A", "pages": {{
                "/wiki/A": ["/wiki/B"],
                "/wiki/B": "<a href=\"/wiki/A\">back</a>"
            }}}}"#
        )
        .unwrap();

        let fixture = GraphFixture::from_file(file.path()).unwrap();
        assert_eq!(fixture.seed, 3);
        assert_eq!(fixture.random.as_deref(), Some("/wiki/A"));
        assert_eq!(
            fixture.pages.get("/wiki/A"),
            Some(&FixturePage::Links(vec!["/wiki/B".to_string()]))
        );

        let provider = InMemoryProvider::from_fixture(fixture);
        assert_eq!(provider.page_count(), 2);
        assert_eq!(
            provider.get_page("/wiki/B").unwrap(),
            r#"<a href="/wiki/A">back</a>"#
        );
    }

    #[test]
    fn test_render_links_escapes_attributes() {
        let html = render_links(&["/wiki/A&B"]);
        assert!(html.contains(r#"href="/wiki/A&amp;B""#));
        let links = WikiLinkExtractor::new().extract_links(&html);
        assert_eq!(links, vec!["/wiki/A&B"]);
    }
}
