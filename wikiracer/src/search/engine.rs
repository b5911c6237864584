//! Search entry points and the shared expansion loop.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use super::cost::{identifier_length, CostFn};
use super::expander::Expander;
use super::frontier::{CostFrontier, FifoFrontier, Frontier, FrontierEntry, LifoFrontier};
use crate::links::{HtmlTextExtractor, LinkExtractor, TextExtractor, WikiLinkExtractor};
use crate::observability::{SearchSpanAttributes, SpanTimer};
use crate::provider::{FetchObserver, LoggingFetchObserver, PageProvider};

/// Frontier ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// First-in-first-out; finds a path with the fewest edges.
    Bfs,
    /// Last-in-first-out; no shortest-path guarantee.
    Dfs,
    /// Cheapest accumulated cost first (uniform-cost search).
    Dijkstra,
}

impl SearchMode {
    /// Lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Whether entries are ordered by accumulated cost.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra)
    }

    /// An empty frontier with this mode's ordering.
    #[must_use]
    pub fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Self::Bfs => Box::new(FifoFrontier::new()),
            Self::Dfs => Box::new(LifoFrontier::new()),
            Self::Dijkstra => Box::new(CostFrontier::new()),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Pages fetched.
    pub fetches: usize,
    /// Entries pushed onto the frontier.
    pub pushed: usize,
    /// Entries dropped on pop because their node was visited or a cheaper
    /// route was known.
    pub discarded: usize,
    /// Largest frontier size.
    pub frontier_high_water: usize,
}

/// Path (if any) plus the counters of the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The path found, source first.
    pub path: Option<Vec<String>>,
    /// Run counters.
    pub stats: SearchStats,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: f64,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Runs searches over a page provider.
///
/// Each call owns its frontier, visited set and cost map; nothing carries
/// over between calls except what the provider itself records.
#[derive(Clone)]
pub struct SearchEngine<'a> {
    provider: &'a dyn PageProvider,
    extractor: Arc<dyn LinkExtractor>,
    text_extractor: Arc<dyn TextExtractor>,
    observer: Arc<dyn FetchObserver>,
}

impl fmt::Debug for SearchEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine").finish_non_exhaustive()
    }
}

impl<'a> SearchEngine<'a> {
    /// Creates an engine with the default extractors and a logging observer.
    #[must_use]
    pub fn new(provider: &'a dyn PageProvider) -> Self {
        Self {
            provider,
            extractor: Arc::new(WikiLinkExtractor::new()),
            text_extractor: Arc::new(HtmlTextExtractor),
            observer: Arc::new(LoggingFetchObserver),
        }
    }

    /// Replaces the link extractor.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn LinkExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replaces the text extractor used by find-in-page.
    #[must_use]
    pub fn with_text_extractor(mut self, text_extractor: Arc<dyn TextExtractor>) -> Self {
        self.text_extractor = text_extractor;
        self
    }

    /// Replaces the fetch observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The provider this engine fetches from.
    #[must_use]
    pub fn provider(&self) -> &'a dyn PageProvider {
        self.provider
    }

    pub(crate) fn expander(&self) -> Expander<'_> {
        Expander::new(self.provider, &*self.extractor, &*self.observer)
    }

    pub(crate) fn text_extractor(&self) -> &dyn TextExtractor {
        &*self.text_extractor
    }

    /// Breadth-first search.
    pub fn bfs(&self, source: &str, goal: &str) -> Option<Vec<String>> {
        self.search(source, goal, SearchMode::Bfs, None)
    }

    /// Depth-first search.
    pub fn dfs(&self, source: &str, goal: &str) -> Option<Vec<String>> {
        self.search(source, goal, SearchMode::Dfs, None)
    }

    /// Uniform-cost search; `cost_fn` defaults to [`identifier_length`].
    pub fn dijkstras(
        &self,
        source: &str,
        goal: &str,
        cost_fn: Option<&CostFn<'_>>,
    ) -> Option<Vec<String>> {
        self.search(source, goal, SearchMode::Dijkstra, cost_fn)
    }

    /// Runs `mode`, returning only the path.
    pub fn search(
        &self,
        source: &str,
        goal: &str,
        mode: SearchMode,
        cost_fn: Option<&CostFn<'_>>,
    ) -> Option<Vec<String>> {
        self.search_with_stats(source, goal, mode, cost_fn).path
    }

    /// Runs `mode`, returning the path with run counters.
    ///
    /// `cost_fn` is ignored by the unweighted modes.
    pub fn search_with_stats(
        &self,
        source: &str,
        goal: &str,
        mode: SearchMode,
        cost_fn: Option<&CostFn<'_>>,
    ) -> SearchOutcome {
        let timer = SpanTimer::start(mode.as_str());
        let mut expander = self.expander();
        let mut frontier = mode.frontier();
        let default_cost: &CostFn<'_> = &identifier_length;
        let weights = mode.is_weighted().then(|| cost_fn.unwrap_or(default_cost));

        let (path, mut stats) = if source == goal {
            expander.neighbors(source);
            (
                Some(vec![source.to_string(), goal.to_string()]),
                SearchStats::default(),
            )
        } else {
            run(&mut expander, frontier.as_mut(), source, goal, weights)
        };
        stats.fetches = expander.fetches();
        stats.frontier_high_water = frontier.high_water();

        let duration_ms = timer.finish();
        SearchSpanAttributes::new(mode.as_str(), source, goal)
            .with_fetches(stats.fetches)
            .with_path(path.as_deref())
            .with_duration_ms(duration_ms)
            .emit();

        SearchOutcome {
            path,
            stats,
            duration_ms,
        }
    }
}

/// The expansion loop shared by every mode.
///
/// With `weights` the lowest-known-cost map gates pushes and rejects stale
/// entries; without it every unvisited neighbor is pushed at depth cost.
fn run(
    expander: &mut Expander<'_>,
    frontier: &mut dyn Frontier,
    source: &str,
    goal: &str,
    weights: Option<&CostFn<'_>>,
) -> (Option<Vec<String>>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut lowest: HashMap<String, f64> = HashMap::new();

    lowest.insert(source.to_string(), 0.0);
    frontier.push(FrontierEntry::root(source));
    stats.pushed += 1;

    while let Some(entry) = frontier.pop() {
        let stale = weights.is_some()
            && lowest
                .get(&entry.node)
                .is_some_and(|&best| entry.cost > best);
        if stale || visited.contains(&entry.node) {
            stats.discarded += 1;
            continue;
        }

        visited.insert(entry.node.clone());
        let neighbors = expander.neighbors(&entry.node);
        tracing::debug!(
            node = %entry.node,
            depth = entry.depth(),
            cost = entry.cost,
            neighbors = neighbors.len(),
            frontier = frontier.len(),
            "Expanded"
        );

        for neighbor in neighbors {
            if visited.contains(&neighbor) {
                continue;
            }
            if neighbor == goal {
                return (Some(entry.extended_path(&neighbor)), stats);
            }

            match weights {
                Some(cost_fn) => {
                    let step = cost_fn(&entry.node, &neighbor);
                    debug_assert!(step >= 0.0, "negative edge cost {step} to {neighbor}");
                    let cost = entry.cost + step;
                    let best = lowest.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                    if cost < best {
                        frontier.push(entry.child(&neighbor, cost));
                        lowest.insert(neighbor, cost);
                        stats.pushed += 1;
                    }
                }
                None => {
                    frontier.push(entry.child(&neighbor, entry.cost + 1.0));
                    stats.pushed += 1;
                }
            }
        }
    }

    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{InMemoryProvider, SelfLinkProvider};
    use pretty_assertions::assert_eq;

    fn diamond() -> InMemoryProvider {
        InMemoryProvider::from_links([
            ("/wiki/S", vec!["/wiki/Long_detour", "/wiki/M"]),
            ("/wiki/Long_detour", vec!["/wiki/G"]),
            ("/wiki/M", vec!["/wiki/G"]),
        ])
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(SearchMode::Bfs.to_string(), "bfs");
        assert_eq!(SearchMode::Dijkstra.as_str(), "dijkstra");
        assert!(SearchMode::Dijkstra.is_weighted());
        assert!(!SearchMode::Dfs.is_weighted());
        assert_eq!(
            serde_json::to_value(SearchMode::Dfs).unwrap(),
            serde_json::json!("dfs")
        );
    }

    #[test]
    fn test_bfs_takes_first_discovered_route() {
        let provider = diamond();
        let engine = SearchEngine::new(&provider);

        let path = engine.bfs("/wiki/S", "/wiki/G");
        assert_eq!(
            path,
            Some(vec![
                "/wiki/S".to_string(),
                "/wiki/Long_detour".to_string(),
                "/wiki/G".to_string()
            ])
        );
        assert_eq!(provider.requests(), vec!["/wiki/S", "/wiki/Long_detour"]);
    }

    #[test]
    fn test_dfs_explores_last_neighbor_first() {
        let provider = diamond();
        let engine = SearchEngine::new(&provider);

        let path = engine.dfs("/wiki/S", "/wiki/G").unwrap();
        assert_eq!(path, vec!["/wiki/S", "/wiki/M", "/wiki/G"]);
        assert_eq!(provider.requests(), vec!["/wiki/S", "/wiki/M"]);
    }

    #[test]
    fn test_dijkstra_default_cost_prefers_short_identifiers() {
        let provider = diamond();
        let engine = SearchEngine::new(&provider);

        let path = engine.dijkstras("/wiki/S", "/wiki/G", None).unwrap();
        assert_eq!(path, vec!["/wiki/S", "/wiki/M", "/wiki/G"]);
        assert_eq!(provider.requests(), vec!["/wiki/S", "/wiki/M"]);
    }

    #[test]
    fn test_dijkstra_custom_cost() {
        let provider = diamond();
        let engine = SearchEngine::new(&provider);
        let prefer_detour = |_: &str, to: &str| if to.contains("detour") { 1.0 } else { 50.0 };

        let path = engine
            .dijkstras("/wiki/S", "/wiki/G", Some(&prefer_detour))
            .unwrap();
        assert_eq!(path, vec!["/wiki/S", "/wiki/Long_detour", "/wiki/G"]);
    }

    #[test]
    fn test_dijkstra_relaxes_to_cheaper_route() {
        // B is first reached expensively from S, then cheaply through A.
        let provider = InMemoryProvider::from_links([
            ("/wiki/S", vec!["/wiki/A", "/wiki/B"]),
            ("/wiki/A", vec!["/wiki/B"]),
            ("/wiki/B", vec!["/wiki/G"]),
        ]);
        let engine = SearchEngine::new(&provider);
        let cost = |from: &str, to: &str| match (from, to) {
            ("/wiki/S", "/wiki/A") => 1.0,
            ("/wiki/S", "/wiki/B") => 10.0,
            ("/wiki/A", "/wiki/B") => 1.0,
            _ => 1.0,
        };

        let outcome =
            engine.search_with_stats("/wiki/S", "/wiki/G", SearchMode::Dijkstra, Some(&cost));
        assert_eq!(
            outcome.path.unwrap(),
            vec!["/wiki/S", "/wiki/A", "/wiki/B", "/wiki/G"]
        );
        assert_eq!(provider.requests(), vec!["/wiki/S", "/wiki/A", "/wiki/B"]);
        assert_eq!(outcome.stats.fetches, 3);
        assert_eq!(outcome.stats.pushed, 4);
    }

    #[test]
    fn test_dijkstra_discards_stale_entry_without_fetch() {
        // B is pushed at 10 from S, relaxed to 2 through A, and the goal is
        // unreachable, so the B(10) entry surfaces after B was expanded.
        let provider = InMemoryProvider::from_links([
            ("/wiki/S", vec!["/wiki/A", "/wiki/B"]),
            ("/wiki/A", vec!["/wiki/B"]),
            ("/wiki/B", vec!["/wiki/X"]),
        ]);
        let engine = SearchEngine::new(&provider);
        let cost = |from: &str, to: &str| {
            if (from, to) == ("/wiki/S", "/wiki/B") {
                10.0
            } else {
                1.0
            }
        };

        let outcome =
            engine.search_with_stats("/wiki/S", "/wiki/Nope", SearchMode::Dijkstra, Some(&cost));
        assert!(!outcome.is_found());
        assert_eq!(
            provider.requests(),
            vec!["/wiki/S", "/wiki/A", "/wiki/B", "/wiki/X"]
        );
        assert_eq!(outcome.stats.discarded, 1);
        assert_eq!(outcome.stats.pushed, 5);
    }

    #[test]
    fn test_stale_and_visited_entries_are_not_refetched() {
        // Both A and B link to C before C is expanded; C must be fetched once.
        let provider = InMemoryProvider::from_links([
            ("/wiki/S", vec!["/wiki/A", "/wiki/B"]),
            ("/wiki/A", vec!["/wiki/C"]),
            ("/wiki/B", vec!["/wiki/C"]),
            ("/wiki/C", vec!["/wiki/D"]),
        ]);
        let engine = SearchEngine::new(&provider);

        let outcome = engine.search_with_stats("/wiki/S", "/wiki/Nope", SearchMode::Bfs, None);
        assert!(!outcome.is_found());
        assert_eq!(
            provider.requests(),
            vec!["/wiki/S", "/wiki/A", "/wiki/B", "/wiki/C", "/wiki/D"]
        );
        assert_eq!(outcome.stats.discarded, 1);
    }

    #[test]
    fn test_source_equals_goal_fetches_once() {
        let provider = SelfLinkProvider::new();
        let engine = SearchEngine::new(&provider);

        let outcome = engine.search_with_stats("/wiki/X", "/wiki/X", SearchMode::Dfs, None);
        assert_eq!(outcome.path.unwrap(), vec!["/wiki/X", "/wiki/X"]);
        assert_eq!(outcome.stats.fetches, 1);
        assert_eq!(provider.requests(), vec!["/wiki/X"]);
    }

    #[test]
    fn test_cost_fn_ignored_by_unweighted_modes() {
        let provider = diamond();
        let engine = SearchEngine::new(&provider);
        let cost = |_: &str, to: &str| if to.contains('M') { 0.0 } else { 100.0 };

        let path = engine
            .search("/wiki/S", "/wiki/G", SearchMode::Bfs, Some(&cost))
            .unwrap();
        assert_eq!(path[1], "/wiki/Long_detour");
    }
}
