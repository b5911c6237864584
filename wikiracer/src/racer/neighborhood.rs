//! Bounded breadth-first sampling of the goal's neighborhood.

use serde::Serialize;
use std::collections::{HashSet, VecDeque};

use crate::config::RacerConfig;
use crate::search::Expander;

/// Why goal-side sampling stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Enough source neighbors showed up two hops from the goal.
    Overlap,
    /// The source itself was seen on the goal side.
    SourceReached,
    /// The fetch-budget guard tripped.
    Budget,
    /// Every first-order goal neighbor was popped.
    Exhausted,
}

/// What sampling the goal side revealed.
#[derive(Debug, Clone, Default)]
pub struct GoalNeighborhood {
    /// First-order goal neighbors not yet popped.
    pub remaining: VecDeque<String>,
    /// Neighbors of every sampled page, in fetch order, duplicates kept.
    pub second_order: Vec<String>,
    /// Pages fetched while sampling.
    pub samples: HashSet<String>,
    /// Sampled pages that link directly to the goal.
    pub good: HashSet<String>,
    /// Source neighbors present in the second-order neighborhood.
    pub overlap: HashSet<String>,
    second_order_set: HashSet<String>,
    remaining_set: HashSet<String>,
}

impl GoalNeighborhood {
    /// Pops `goal_links` one at a time, fetching each eligible page, until
    /// one of the stop conditions in `config` holds.
    ///
    /// Hub links, the goal itself and already-sampled pages are popped
    /// without a fetch.
    pub fn explore(
        expander: &mut Expander<'_>,
        source: &str,
        goal: &str,
        source_links: &HashSet<String>,
        goal_links: Vec<String>,
        hubs: &HashSet<String>,
        config: &RacerConfig,
    ) -> (Self, StopReason) {
        let mut hood = Self {
            remaining: goal_links.into(),
            ..Self::default()
        };
        let mut reason = StopReason::Exhausted;

        while let Some(sample) = hood.remaining.pop_front() {
            if !hubs.contains(&sample) && sample != goal && !hood.samples.contains(&sample) {
                let neighbors = expander.neighbors(&sample);
                if neighbors.iter().any(|n| n == goal) {
                    hood.good.insert(sample.clone());
                }
                for neighbor in neighbors {
                    if source_links.contains(&neighbor) {
                        hood.overlap.insert(neighbor.clone());
                    }
                    hood.second_order_set.insert(neighbor.clone());
                    hood.second_order.push(neighbor);
                }
                hood.samples.insert(sample);
            }

            if hood.overlap.len() > config.overlap_threshold {
                reason = StopReason::Overlap;
                break;
            }
            if hood.second_order_set.contains(source) || hood.remaining.iter().any(|l| l == source)
            {
                reason = StopReason::SourceReached;
                break;
            }
            if config.budget_exhausted(hood.remaining.len(), hood.total()) {
                reason = StopReason::Budget;
                break;
            }
        }

        hood.remaining_set = hood.remaining.iter().cloned().collect();
        tracing::debug!(
            ?reason,
            samples = hood.samples.len(),
            second_order = hood.second_order.len(),
            overlap = hood.overlap.len(),
            good = hood.good.len(),
            "Goal-side sampling stopped"
        );
        (hood, reason)
    }

    /// Assembles a neighborhood from already-known parts.
    #[must_use]
    pub fn from_parts(
        remaining: Vec<String>,
        second_order: Vec<String>,
        samples: HashSet<String>,
        good: HashSet<String>,
        overlap: HashSet<String>,
    ) -> Self {
        Self {
            remaining_set: remaining.iter().cloned().collect(),
            second_order_set: second_order.iter().cloned().collect(),
            remaining: remaining.into(),
            second_order,
            samples,
            good,
            overlap,
        }
    }

    /// Second-order size plus queue length plus sample count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.second_order.len() + self.remaining.len() + self.samples.len()
    }

    /// Whether `id` is still queued or was sampled.
    #[must_use]
    pub fn is_goal_side(&self, id: &str) -> bool {
        self.remaining_set.contains(id) || self.samples.contains(id)
    }

    /// Whether `id` appeared among the sampled pages' neighbors.
    #[must_use]
    pub fn in_second_order(&self, id: &str) -> bool {
        self.second_order_set.contains(id)
    }
}
