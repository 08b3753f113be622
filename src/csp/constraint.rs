use std::fmt;

use crate::csp::assignment::Assignment;

/// Human-readable identity of a constraint, used by stats rendering and
/// debug output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule restricting the joint values of a subset of the problem's
/// variables.
///
/// `satisfied` is called repeatedly on overlapping partial assignments
/// during backtracking, so it must be a pure total predicate and must
/// tolerate any strict subset of its variables being bound. The usual shape
/// is "vacuously true until enough variables are bound to decide".
pub trait Constraint<V, D>: fmt::Debug {
    /// The variables this constraint restricts.
    fn variables(&self) -> &[V];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Whether the rule holds under the given (possibly partial) assignment.
    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool;
}
