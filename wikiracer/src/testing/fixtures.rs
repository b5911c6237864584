//! Graph fixtures for search testing.

use std::collections::BTreeMap;

use crate::provider::InMemoryProvider;

/// Prefixes `title` with `/wiki/` unless it already carries it.
#[must_use]
pub fn wiki(title: &str) -> String {
    if title.starts_with("/wiki/") {
        title.to_string()
    } else {
        format!("/wiki/{title}")
    }
}

/// A directed link graph builder.
///
/// Titles are accepted with or without the `/wiki/` prefix. Nodes that only
/// appear as edge targets get no page, so fetching them fails.
#[derive(Debug, Clone, Default)]
pub struct TestGraph {
    links: BTreeMap<String, Vec<String>>,
    random: Option<String>,
}

impl TestGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page with no outgoing links.
    #[must_use]
    pub fn page(mut self, title: &str) -> Self {
        self.links.entry(wiki(title)).or_default();
        self
    }

    /// Adds one link.
    #[must_use]
    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.links.entry(wiki(from)).or_default().push(wiki(to));
        self
    }

    /// Adds a link from `from` to each of `targets`, in order.
    #[must_use]
    pub fn edges(self, from: &str, targets: &[&str]) -> Self {
        targets
            .iter()
            .fold(self, |graph, to| graph.edge(from, to))
    }

    /// Links consecutive titles.
    #[must_use]
    pub fn chain(self, titles: &[&str]) -> Self {
        titles
            .windows(2)
            .fold(self, |graph, pair| graph.edge(pair[0], pair[1]))
    }

    /// Serves `title` for every random request.
    #[must_use]
    pub fn random(mut self, title: &str) -> Self {
        self.random = Some(wiki(title));
        self
    }

    /// Builds the provider.
    #[must_use]
    pub fn build(self) -> InMemoryProvider {
        let provider = InMemoryProvider::from_links(self.links);
        match self.random {
            Some(id) => provider.with_random_page(id),
            None => provider,
        }
    }
}

/// A single page, `/wiki/ASDF`, linking only to itself.
#[must_use]
pub fn asdf_graph() -> InMemoryProvider {
    TestGraph::new().edge("ASDF", "ASDF").build()
}

/// A graph where the first-listed route from `S` to `G` is long and the
/// last-listed one is short.
///
/// ```text
/// S -> A -> B -> C -> G
/// S -> D -> G
/// ```
#[must_use]
pub fn two_route_graph() -> InMemoryProvider {
    TestGraph::new()
        .chain(&["S", "A", "B", "C", "G"])
        .chain(&["S", "D", "G"])
        .build()
}

/// `layers` layers of `width` pages; every page links to `fan_out` pages of
/// the next layer. Page names are `L{layer}_{index}`.
#[must_use]
pub fn layered_graph(layers: usize, width: usize, fan_out: usize) -> InMemoryProvider {
    let mut graph = TestGraph::new();
    for layer in 0..layers {
        for index in 0..width {
            let from = format!("L{layer}_{index}");
            graph = graph.page(&from);
            if layer + 1 == layers {
                continue;
            }
            for offset in 0..fan_out.min(width) {
                let to = format!("L{}_{}", layer + 1, (index + offset) % width);
                graph = graph.edge(&from, &to);
            }
        }
    }
    graph.build()
}
