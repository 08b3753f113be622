use std::collections::HashSet;
use std::hash::Hash;

use crate::csp::{
    assignment::{Assignment, Value, Variable},
    constraint::{Constraint, ConstraintDescriptor},
};

/// Requires every variable in a set to take a distinct value.
///
/// Only the currently-bound subset is checked, so the constraint stays
/// partial-assignment safe: a duplicate among bound variables violates it,
/// anything else passes.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint<V> {
    pub vars: Vec<V>,
}

impl<V> AllDifferentConstraint<V> {
    pub fn new(vars: Vec<V>) -> Self {
        Self { vars }
    }
}

impl<V: Variable, D: Value + Eq + Hash> Constraint<V, D> for AllDifferentConstraint<V> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("?{v:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({vars_str})"),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        let mut seen = HashSet::new();
        for variable in &self.vars {
            if let Some(value) = assignment.get(variable) {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(pairs: &[(&'static str, i64)]) -> Assignment<&'static str, i64> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn partial_assignment_without_duplicates_passes() {
        let constraint = AllDifferentConstraint::new(vec!["a", "b", "c"]);
        assert!(constraint.satisfied(&bind(&[("a", 1), ("b", 2)])));
        assert!(constraint.satisfied(&bind(&[])));
    }

    #[test]
    fn duplicate_among_bound_variables_violates() {
        let constraint = AllDifferentConstraint::new(vec!["a", "b", "c"]);
        assert!(!constraint.satisfied(&bind(&[("a", 1), ("c", 1)])));
    }

    #[test]
    fn bindings_outside_the_constraint_are_ignored() {
        let constraint = AllDifferentConstraint::new(vec!["a", "b"]);
        // "z" duplicating "a" is someone else's business.
        assert!(constraint.satisfied(&bind(&[("a", 1), ("z", 1)])));
    }
}
