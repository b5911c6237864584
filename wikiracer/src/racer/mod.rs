//! Fetch-minimizing heuristic routing.
//!
//! This module provides:
//! - [`WikiRacer`], which probes both endpoints and a random page
//! - Goal-side neighborhood sampling with bounded stop conditions
//! - The tiered cost function fed to the weighted search
//! - Identifier tokenization, the stoplist and the useful-page list

mod keywords;
mod neighborhood;
mod router;
mod tiers;

pub use keywords::{is_stopword, is_useful, keyword_set, tokenize, STOPLIST, USEFUL_PAGES};
pub use neighborhood::{GoalNeighborhood, StopReason};
pub use router::{RouteOutcome, WikiRacer};
pub use tiers::{CostTier, TieredCost};
