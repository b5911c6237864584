//! Tiered edge costs derived from the probes.

use serde::Serialize;
use std::collections::HashSet;

use super::keywords::{is_useful, tokenize};
use super::neighborhood::GoalNeighborhood;

/// Cost bands, in the order they are checked.
///
/// The first matching tier wins; see [`TieredCost::tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    /// Shared by the source and a random page; carries no direction.
    Hub,
    /// Links directly to the goal.
    ReachesGoal,
    /// A first-order goal neighbor, queued or sampled.
    GoalSide,
    /// On the useful-page list, or a source neighbor two hops from the goal.
    Useful,
    /// Two hops from the goal.
    SecondOrder,
    /// Shares a word with the keyword set.
    Keyword,
    /// Nothing known.
    Unrelated,
}

impl CostTier {
    /// Every tier in the order they are checked.
    pub const ALL: [Self; 7] = [
        Self::Hub,
        Self::ReachesGoal,
        Self::GoalSide,
        Self::Useful,
        Self::SecondOrder,
        Self::Keyword,
        Self::Unrelated,
    ];

    /// Edge cost of stepping onto a node in this tier.
    #[must_use]
    pub const fn cost(self) -> f64 {
        match self {
            Self::Hub => 9_999_999_999.0,
            Self::ReachesGoal => 0.0,
            Self::GoalSide => 0.1,
            Self::Useful => 1.0,
            Self::SecondOrder => 10.0,
            Self::Keyword => 100.0,
            Self::Unrelated => 10_000.0,
        }
    }
}

/// Cost function built from the source, random and goal-side probes.
#[derive(Debug, Clone)]
pub struct TieredCost {
    hubs: HashSet<String>,
    neighborhood: GoalNeighborhood,
    keywords: HashSet<String>,
    marker: String,
}

impl TieredCost {
    /// Creates a cost function from probe results.
    #[must_use]
    pub fn new(
        hubs: HashSet<String>,
        neighborhood: GoalNeighborhood,
        keywords: HashSet<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            hubs,
            neighborhood,
            keywords,
            marker: marker.into(),
        }
    }

    /// The keyword set.
    #[must_use]
    pub const fn keywords(&self) -> &HashSet<String> {
        &self.keywords
    }

    /// Tier of candidate `to`.
    #[must_use]
    pub fn tier(&self, to: &str) -> CostTier {
        let hood = &self.neighborhood;
        if self.hubs.contains(to) {
            CostTier::Hub
        } else if hood.good.contains(to) {
            CostTier::ReachesGoal
        } else if hood.is_goal_side(to) {
            CostTier::GoalSide
        } else if is_useful(to, &self.marker) || hood.overlap.contains(to) {
            CostTier::Useful
        } else if hood.in_second_order(to) {
            CostTier::SecondOrder
        } else if tokenize(to, &self.marker)
            .iter()
            .any(|token| self.keywords.contains(token))
        {
            CostTier::Keyword
        } else {
            CostTier::Unrelated
        }
    }

    /// Edge cost; depends only on the candidate.
    #[must_use]
    pub fn cost(&self, _from: &str, to: &str) -> f64 {
        self.tier(to).cost()
    }
}
