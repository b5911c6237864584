//! Frontier search over a lazily fetched link graph.
//!
//! This module provides:
//! - Breadth-first, depth-first and uniform-cost search sharing one loop
//! - Find-in-page search over visible page text
//! - Edge cost functions and frontier orderings
//! - A serializable [`SearchReport`]

mod cost;
mod engine;
mod expander;
mod find_in_page;
mod frontier;
mod report;


pub use cost::{identifier_length, unit_cost, CostFn};
pub use engine::{SearchEngine, SearchMode, SearchOutcome, SearchStats};
pub use expander::Expander;
pub use find_in_page::query_tokens;
pub use frontier::{CostFrontier, FifoFrontier, Frontier, FrontierEntry, LifoFrontier};
pub use report::SearchReport;
