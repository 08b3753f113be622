use crate::csp::{
    assignment::{Assignment, Value, Variable},
    constraint::{Constraint, ConstraintDescriptor},
};

/// Requires two variables to take different values.
///
/// Vacuously satisfied while either variable is still unbound.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<V> {
    pub vars: [V; 2],
}

impl<V> NotEqualConstraint<V> {
    pub fn new(a: V, b: V) -> Self {
        Self { vars: [a, b] }
    }
}

impl<V: Variable, D: Value + PartialEq> Constraint<V, D> for NotEqualConstraint<V> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("?{:?} != ?{:?}", self.vars[0], self.vars[1]),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match (assignment.get(&self.vars[0]), assignment.get(&self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }
}
