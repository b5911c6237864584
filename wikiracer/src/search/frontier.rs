//! Frontier orderings: FIFO, LIFO and cheapest-first.
//!
//! All three share one entry type so the search loop is written once; only
//! the order in which entries come back out differs.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A reached-but-not-expanded node together with how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    /// Accumulated cost (depth for unweighted searches).
    pub cost: f64,
    /// Node identifier.
    pub node: String,
    /// Path from the source to `node`, inclusive.
    pub path: Vec<String>,
}

impl FrontierEntry {
    /// Entry for the search source.
    #[must_use]
    pub fn root(source: &str) -> Self {
        Self {
            cost: 0.0,
            node: source.to_string(),
            path: vec![source.to_string()],
        }
    }

    /// Entry for `neighbor`, reached from this entry at total `cost`.
    #[must_use]
    pub fn child(&self, neighbor: &str, cost: f64) -> Self {
        Self {
            cost,
            node: neighbor.to_string(),
            path: self.extended_path(neighbor),
        }
    }

    /// This entry's path followed by `neighbor`.
    #[must_use]
    pub fn extended_path(&self, neighbor: &str) -> Vec<String> {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(neighbor.to_string());
        path
    }

    /// Number of edges from the source.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// An ordered collection of entries awaiting expansion.
pub trait Frontier {
    /// Adds an entry.
    fn push(&mut self, entry: FrontierEntry);

    /// Removes the next entry according to this frontier's policy.
    fn pop(&mut self) -> Option<FrontierEntry>;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// First-in-first-out frontier (breadth-first search).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
    high_water: usize,
}

impl FifoFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Last-in-first-out frontier (depth-first search).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<FrontierEntry>,
    high_water: usize,
}

impl LifoFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
        self.high_water = self.high_water.max(self.stack.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Heap wrapper ordering entries cheapest-first.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed. Equal costs
/// fall back to the identifier and then the path, which keeps pops
/// deterministic.
#[derive(Debug)]
struct CheapestFirst(FrontierEntry);

impl PartialEq for CheapestFirst {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CheapestFirst {}

impl PartialOrd for CheapestFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CheapestFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .cost
            .total_cmp(&self.0.cost)
            .then_with(|| other.0.node.cmp(&self.0.node))
            .then_with(|| other.0.path.cmp(&self.0.path))
    }
}

/// Min-priority frontier keyed on accumulated cost (uniform-cost search).
///
/// Entries are never updated in place. A cheaper route to a node is pushed
/// as a new entry and the search discards the stale one when it surfaces.
#[derive(Debug, Default)]
pub struct CostFrontier {
    heap: BinaryHeap<CheapestFirst>,
    high_water: usize,
}

impl CostFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for CostFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(CheapestFirst(entry));
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|e| e.0)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
