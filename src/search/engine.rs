//! The generic search engine.
//!
//! All three entry points are polymorphic over the client's state type: the
//! caller supplies a successor function and a goal test (plus a heuristic
//! for [`astar`]) and gets back the goal [`Node`], whose parent chain can be
//! turned into a path with [`crate::search::path::node_to_path`].
//!
//! Exhausting the frontier without reaching a goal is a normal outcome and
//! returns `None`. A successor function that keeps producing fresh states on
//! a goal-free infinite graph will not terminate; the engine adds no
//! iteration cap.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::search::{
    frontier::{Frontier, PriorityQueue, Queue, Stack},
    node::Node,
};

/// Depth-first search from `start` until `goal_test` passes.
pub fn dfs<T, S, I, G>(start: T, successors: S, goal_test: G) -> Option<Arc<Node<T>>>
where
    T: Clone + Eq + Hash,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    G: FnMut(&T) -> bool,
{
    uninformed_search(Stack::new(), start, successors, goal_test)
}

/// Breadth-first search from `start` until `goal_test` passes.
///
/// Level-order expansion means the returned node's path has the minimum
/// number of edges among all paths from `start` to a goal.
pub fn bfs<T, S, I, G>(start: T, successors: S, goal_test: G) -> Option<Arc<Node<T>>>
where
    T: Clone + Eq + Hash,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    G: FnMut(&T) -> bool,
{
    uninformed_search(Queue::new(), start, successors, goal_test)
}

// DFS and BFS are the same loop over different frontiers. States are marked
// visited when pushed, so a state enters the frontier at most once.
fn uninformed_search<T, F, S, I, G>(
    mut frontier: F,
    start: T,
    mut successors: S,
    mut goal_test: G,
) -> Option<Arc<Node<T>>>
where
    T: Clone + Eq + Hash,
    F: Frontier<Arc<Node<T>>>,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    G: FnMut(&T) -> bool,
{
    let mut visited: HashSet<T> = HashSet::new();
    visited.insert(start.clone());
    frontier.push(Arc::new(Node::start(start)));

    let mut expanded: usize = 0;
    while let Some(current) = frontier.pop() {
        if goal_test(&current.state) {
            debug!(expanded, "goal reached");
            return Some(current);
        }
        expanded += 1;
        for child in successors(&current.state) {
            // `insert` returning false means the state was already seen.
            if !visited.insert(child.clone()) {
                continue;
            }
            frontier.push(Arc::new(Node::new(
                child,
                Some(Arc::clone(&current)),
                0.0,
                0.0,
            )));
        }
    }

    debug!(expanded, "frontier exhausted without reaching a goal");
    None
}

/// Best-first search from `start`, ordering the frontier by accumulated cost
/// plus `heuristic`.
///
/// Every transition costs exactly one unit; edge weights are not modeled.
/// With an admissible heuristic (one that never overestimates the true
/// remaining cost) the returned path is cost-optimal. The engine does not
/// verify admissibility: an inadmissible heuristic still terminates, but may
/// return a suboptimal path.
pub fn astar<T, G, S, I, H>(
    start: T,
    mut goal_test: G,
    mut successors: S,
    mut heuristic: H,
) -> Option<Arc<Node<T>>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    H: FnMut(&T) -> f64,
{
    let mut frontier: PriorityQueue<Arc<Node<T>>> = PriorityQueue::new();
    let start_estimate = heuristic(&start);

    // Best cost at which each state has been reached so far.
    let mut explored: HashMap<T, f64> = HashMap::new();
    explored.insert(start.clone(), 0.0);
    frontier.push(Arc::new(Node::new(start, None, 0.0, start_estimate)));

    let mut expanded: usize = 0;
    while let Some(current) = frontier.pop() {
        if goal_test(&current.state) {
            debug!(expanded, cost = current.cost, "goal reached");
            return Some(current);
        }
        expanded += 1;
        for child in successors(&current.state) {
            let new_cost = current.cost + 1.0;
            if let Some(&best) = explored.get(&child) {
                if best <= new_cost {
                    continue;
                }
            }
            explored.insert(child.clone(), new_cost);
            let estimate = heuristic(&child);
            frontier.push(Arc::new(Node::new(
                child,
                Some(Arc::clone(&current)),
                new_cost,
                estimate,
            )));
        }
    }

    debug!(expanded, "frontier exhausted without reaching a goal");
    None
}
