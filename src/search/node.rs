use std::cmp::Ordering;
use std::sync::Arc;

/// A state wrapped with its provenance and search bookkeeping.
///
/// Nodes are immutable once created. The `parent` links form a tree rooted
/// at the start node (never a cycle); sharing is via `Arc`, released when
/// the last path reconstructed from a node is dropped.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub state: T,
    pub parent: Option<Arc<Node<T>>>,
    /// Accumulated path cost from the start state. Non-negative and
    /// non-decreasing along any parent chain.
    pub cost: f64,
    /// Estimated remaining cost to a goal. Zero for uninformed searches.
    pub heuristic: f64,
}

impl<T> Node<T> {
    /// A root node: no parent, zero cost, zero heuristic.
    pub fn start(state: T) -> Self {
        Self {
            state,
            parent: None,
            cost: 0.0,
            heuristic: 0.0,
        }
    }

    pub fn new(state: T, parent: Option<Arc<Node<T>>>, cost: f64, heuristic: f64) -> Self {
        Self {
            state,
            parent,
            cost,
            heuristic,
        }
    }

    /// The value the priority frontier orders by.
    pub fn priority(&self) -> f64 {
        self.cost + self.heuristic
    }
}

// Ordering is by `cost + heuristic` alone, under f64 total ordering so the
// heap never sees an incomparable pair. Two nodes with equal priority are
// "equal" for frontier purposes even when their states differ.
impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority().total_cmp(&other.priority()) == Ordering::Equal
    }
}

impl<T> Eq for Node<T> {}

impl<T> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().total_cmp(&other.priority())
    }
}
