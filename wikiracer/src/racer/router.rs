//! The heuristic router: probe both ends, then run a tiered weighted search.

use std::collections::HashSet;

use super::keywords::keyword_set;
use super::neighborhood::{GoalNeighborhood, StopReason};
use super::tiers::TieredCost;
use crate::config::{LinkFilterConfig, RacerConfig};
use crate::observability::{SearchSpanAttributes, SpanTimer};
use crate::search::{CostFn, SearchEngine, SearchMode};

/// Result of a route with the probe details that shaped it.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    /// The path found, if any.
    pub path: Option<Vec<String>>,
    /// How goal-side sampling ended; `None` when the route was trivial.
    pub stop_reason: Option<StopReason>,
    /// The cost function handed to the weighted search.
    pub cost: Option<TieredCost>,
}

/// Finds a path while spending as few fetches as it can.
///
/// Path length is secondary: the router probes the source, the goal and one
/// random page, samples the goal side until one of the bounded stop
/// conditions fires, and then runs a weighted search whose edge costs pull
/// towards what the probes saw near the goal.
#[derive(Debug, Clone)]
pub struct WikiRacer<'a> {
    engine: SearchEngine<'a>,
    config: RacerConfig,
    marker: String,
}

impl<'a> WikiRacer<'a> {
    /// Creates a router over `engine` with default thresholds.
    #[must_use]
    pub fn new(engine: SearchEngine<'a>) -> Self {
        Self {
            engine,
            config: RacerConfig::default(),
            marker: LinkFilterConfig::default().marker,
        }
    }

    /// Sets the thresholds.
    #[must_use]
    pub fn with_config(mut self, config: RacerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the marker stripped before tokenizing identifiers.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Gets the thresholds.
    #[must_use]
    pub const fn config(&self) -> &RacerConfig {
        &self.config
    }

    /// Finds a path from `source` to `goal`.
    pub fn route(&self, source: &str, goal: &str) -> Option<Vec<String>> {
        self.route_with_details(source, goal).path
    }

    /// Finds a path, also returning the probe results.
    pub fn route_with_details(&self, source: &str, goal: &str) -> RouteOutcome {
        let timer = SpanTimer::start("race");
        let mut expander = self.engine.expander();
        let trivial = Some(vec![source.to_string(), goal.to_string()]);

        if source == goal {
            expander.neighbors(source);
            return finish(source, goal, trivial, expander.fetches(), timer, None);
        }

        let mut source_links = expander.neighbors(source);
        source_links.push(source.to_string());
        let mut goal_links = expander.neighbors(goal);
        goal_links.push(goal.to_string());

        if source_links.iter().any(|link| link == goal) {
            return finish(source, goal, trivial, expander.fetches(), timer, None);
        }

        let source_set: HashSet<String> = source_links.iter().cloned().collect();
        let hubs: HashSet<String> = expander
            .random_neighbors()
            .into_iter()
            .filter(|link| source_set.contains(link))
            .collect();
        let keywords = keyword_set(&source_links, &goal_links, &self.marker);

        let (neighborhood, reason) = GoalNeighborhood::explore(
            &mut expander,
            source,
            goal,
            &source_set,
            goal_links,
            &hubs,
            &self.config,
        );
        let probe_fetches = expander.fetches();
        tracing::info!(
            source,
            goal,
            hubs = hubs.len(),
            keywords = keywords.len(),
            ?reason,
            probe_fetches,
            "Probes finished"
        );

        let tiers = TieredCost::new(hubs, neighborhood, keywords, self.marker.as_str());
        let cost_fn: &CostFn<'_> = &|from, to| tiers.cost(from, to);
        let search =
            self.engine
                .search_with_stats(source, goal, SearchMode::Dijkstra, Some(cost_fn));

        let mut outcome = finish(
            source,
            goal,
            search.path,
            probe_fetches + search.stats.fetches,
            timer,
            Some(reason),
        );
        outcome.cost = Some(tiers);
        outcome
    }
}

fn finish(
    source: &str,
    goal: &str,
    path: Option<Vec<String>>,
    fetches: usize,
    timer: SpanTimer,
    stop_reason: Option<StopReason>,
) -> RouteOutcome {
    SearchSpanAttributes::new("race", source, goal)
        .with_fetches(fetches)
        .with_path(path.as_deref())
        .with_duration_ms(timer.finish())
        .emit();
    RouteOutcome {
        path,
        stop_reason,
        cost: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{InMemoryProvider, PageProvider, SelfLinkProvider, RANDOM_PAGE};
    use crate::racer::CostTier;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direct_neighbor_uses_two_fetches() {
        let provider = InMemoryProvider::from_links([
            ("/wiki/S", vec!["/wiki/A", "/wiki/G"]),
            ("/wiki/G", vec!["/wiki/B"]),
        ]);
        let racer = WikiRacer::new(SearchEngine::new(&provider));

        let outcome = racer.route_with_details("/wiki/S", "/wiki/G");
        assert_eq!(
            outcome.path,
            Some(vec!["/wiki/S".to_string(), "/wiki/G".to_string()])
        );
        assert_eq!(outcome.stop_reason, None);
        assert_eq!(provider.requests(), vec!["/wiki/S", "/wiki/G"]);
    }

    #[test]
    fn test_source_equals_goal_fetches_once() {
        let provider = SelfLinkProvider::new();
        let racer = WikiRacer::new(SearchEngine::new(&provider));

        assert_eq!(
            racer.route("/wiki/ASDF", "/wiki/ASDF"),
            Some(vec!["/wiki/ASDF".to_string(), "/wiki/ASDF".to_string()])
        );
        assert_eq!(provider.requests(), vec!["/wiki/ASDF"]);
    }

    #[test]
    fn test_routes_through_goal_side_page() {
        // S reaches G through either Hub or Bridge; the random page makes Hub
        // a hub link, and sampling marks Bridge as reaching the goal.
        let provider = InMemoryProvider::from_links([
            ("/wiki/S", vec!["/wiki/Hub", "/wiki/Bridge"]),
            ("/wiki/Hub", vec!["/wiki/G"]),
            ("/wiki/Bridge", vec!["/wiki/G", "/wiki/S"]),
            ("/wiki/G", vec!["/wiki/Bridge"]),
        ])
        .with_page("/wiki/Random", r#"<a href="/wiki/Hub">hub</a>"#)
        .with_random_page("/wiki/Random");
        let racer = WikiRacer::new(SearchEngine::new(&provider));

        let outcome = racer.route_with_details("/wiki/S", "/wiki/G");
        let path = outcome.path.clone().unwrap();
        assert_eq!(path, vec!["/wiki/S", "/wiki/Bridge", "/wiki/G"]);

        let requests = provider.requests();
        assert_eq!(&requests[..3], &["/wiki/S", "/wiki/G", RANDOM_PAGE]);
        assert!(requests.iter().all(|r| r != "/wiki/Hub"));

        let cost = outcome.cost.unwrap();
        assert_eq!(cost.tier("/wiki/Bridge"), CostTier::ReachesGoal);
    }

    #[test]
    fn test_no_path_returns_none() {
        let provider = SelfLinkProvider::new();
        let racer = WikiRacer::new(SearchEngine::new(&provider));

        assert_eq!(racer.route("/wiki/Calvin_Li", "/wiki/Wikipedia"), None);
        let requests = provider.requests();
        assert_eq!(
            &requests[..3],
            &["/wiki/Calvin_Li", "/wiki/Wikipedia", RANDOM_PAGE]
        );
    }
}
