//! Testing utilities for searches and routes.
//!
//! This module provides:
//! - Graph fixtures built from titles
//! - Provider and observer doubles
//! - Assertions over paths and request sequences

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{assert_goal_never_fetched, assert_no_repeat_fetches, assert_path_connected};
pub use fixtures::{asdf_graph, layered_graph, two_route_graph, wiki, TestGraph};
pub use mocks::{CountingObserver, FailingProvider, ObserverCounts};
