//! Segugio is a generic toolkit for state-space search and constraint
//! satisfaction.
//!
//! The crate has two independent engines behind one idea: the caller owns
//! the problem, the engine owns the exploration.
//!
//! # Core Concepts
//!
//! - **Search**: wrap a start state and two pure callbacks, a successor
//!   function and a goal test, and hand them to [`search::engine::dfs`],
//!   [`search::engine::bfs`] or [`search::engine::astar`]. The engine
//!   returns the goal [`search::node::Node`]; its parent chain becomes a
//!   start-to-goal path via [`search::path::node_to_path`].
//! - **CSP**: declare variables, a domain of candidate values per variable,
//!   and [`csp::constraint::Constraint`] objects, then let
//!   [`csp::engine::Csp::backtracking_search`] find a satisfying assignment.
//!
//! # Example: fewest steps to a number
//!
//! ```
//! use segugio::search::{engine::bfs, path::node_to_path};
//!
//! // From 1, each step may add 1 or 2. Breadth-first expansion finds the
//! // fewest-step route to 5.
//! let result = bfs(1u32, |n| vec![n + 1, n + 2], |n| *n == 5).unwrap();
//! assert_eq!(node_to_path(&result), vec![1, 3, 5]);
//! ```
//!
//! # Example: a two-variable CSP
//!
//! Solving `?a != ?b` where `?a` can be `1` or `2` and `?b` can only be `1`:
//! the solver must conclude `?a = 2`.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use segugio::csp::{constraints::not_equal::NotEqualConstraint, engine::Csp};
//!
//! let domains = HashMap::from([("a", vec![1, 2]), ("b", vec![1])]);
//! let mut csp = Csp::new(vec!["a", "b"], domains).unwrap();
//! csp.add_constraint(Box::new(NotEqualConstraint::new("a", "b"))).unwrap();
//!
//! let solution = csp.backtracking_search().unwrap();
//! assert_eq!(solution.get("a"), Some(&2));
//! assert_eq!(solution.get("b"), Some(&1));
//! ```

pub mod csp;
pub mod error;
pub mod graph;
pub mod problems;
pub mod search;
