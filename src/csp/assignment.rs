use std::hash::Hash;

/// A variable-to-value binding that need not cover every variable.
///
/// Extending a persistent map for a tentative guess is a structural-sharing
/// copy, and backtracking is simply dropping that copy. A variable is never
/// bound twice within one assignment.
pub type Assignment<V, D> = im::HashMap<V, D>;

/// Convenience for the trait bounds every CSP variable must satisfy.
pub trait Variable: Clone + Eq + Hash + std::fmt::Debug {}
impl<T> Variable for T where T: Clone + Eq + Hash + std::fmt::Debug {}

/// Convenience for the trait bounds every domain value must satisfy.
pub trait Value: Clone + std::fmt::Debug {}
impl<T> Value for T where T: Clone + std::fmt::Debug {}
