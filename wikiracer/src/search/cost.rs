//! Edge cost functions for the weighted search.

/// Cost of stepping from one node to a neighbor.
///
/// Must be pure and return non-negative values; the weighted search does not
/// defend against negative edges.
pub type CostFn<'a> = dyn Fn(&str, &str) -> f64 + 'a;

/// Default edge cost: the length of the neighbor identifier in characters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn identifier_length(_from: &str, to: &str) -> f64 {
    to.chars().count() as f64
}

/// Edge cost that makes the weighted search behave like breadth-first search.
#[must_use]
pub const fn unit_cost(_from: &str, _to: &str) -> f64 {
    1.0
}
