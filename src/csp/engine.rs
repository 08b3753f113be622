use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{
    csp::{
        assignment::{Assignment, Value, Variable},
        constraint::Constraint,
    },
    error::{ConfigError, Result},
};

pub type ConstraintId = usize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PerConstraintStats {
    pub checks: u64,
    pub violations: u64,
    pub time_spent_micros: u64,
}

/// Counters accumulated over one solving run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// A constraint-satisfaction problem: a fixed ordered set of variables, a
/// domain of candidate values per variable, and the constraints restricting
/// them.
///
/// The solver is plain backtracking: variables are branched on in
/// declaration order and values tried in domain order, with no
/// arc-consistency preprocessing, forward checking, or reordering
/// heuristics. Those two orders fully determine the first solution found,
/// which makes runs reproducible.
#[derive(Debug)]
pub struct Csp<V: Variable, D: Value> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<D>>,
    constraints: Vec<Box<dyn Constraint<V, D>>>,
    // Multimap from variable to the constraints that mention it, in
    // registration order.
    constraints_for: HashMap<V, Vec<ConstraintId>>,
}

impl<V: Variable, D: Value> Csp<V, D> {
    /// Creates a problem over `variables`, each of which must have an entry
    /// in `domains`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingDomain`] if a declared variable has no domain.
    pub fn new(variables: Vec<V>, domains: HashMap<V, Vec<D>>) -> Result<Self> {
        for variable in &variables {
            if !domains.contains_key(variable) {
                return Err(ConfigError::MissingDomain(format!("{variable:?}")).into());
            }
        }
        Ok(Self {
            variables,
            domains,
            constraints: Vec::new(),
            constraints_for: HashMap::new(),
        })
    }

    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint<V, D>>] {
        &self.constraints
    }

    /// Registers a constraint, indexing it under each variable it mentions.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UndeclaredVariable`] if the constraint references a
    /// variable outside the problem. Reported here, at registration, rather
    /// than deferred to search time.
    pub fn add_constraint(&mut self, constraint: Box<dyn Constraint<V, D>>) -> Result<()> {
        for variable in constraint.variables() {
            if !self.domains.contains_key(variable) {
                return Err(ConfigError::UndeclaredVariable(format!("{variable:?}")).into());
            }
        }
        let id = self.constraints.len();
        for variable in constraint.variables() {
            self.constraints_for
                .entry(variable.clone())
                .or_default()
                .push(id);
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// Whether every constraint mentioning `variable` is satisfied by the
    /// given (possibly partial) assignment.
    pub fn consistent(&self, variable: &V, assignment: &Assignment<V, D>) -> bool {
        match self.constraints_for.get(variable) {
            Some(ids) => ids
                .iter()
                .all(|&id| self.constraints[id].satisfied(assignment)),
            None => true,
        }
    }

    /// Finds the first satisfying complete assignment, or `None` when the
    /// problem is unsatisfiable. Absence is a normal outcome, not an error.
    pub fn backtracking_search(&self) -> Option<Assignment<V, D>> {
        self.solve().0
    }

    /// Resumes search from a partial assignment. Bindings already present
    /// are kept as-is and not re-checked.
    pub fn backtracking_search_from(&self, assignment: Assignment<V, D>) -> Option<Assignment<V, D>> {
        let mut stats = SearchStats::default();
        self.search(assignment, &mut stats)
    }

    /// Like [`Csp::backtracking_search`], additionally reporting the
    /// counters gathered during the run.
    pub fn solve(&self) -> (Option<Assignment<V, D>>, SearchStats) {
        let mut stats = SearchStats::default();
        let solution = self.search(Assignment::new(), &mut stats);
        debug!(
            nodes_visited = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "backtracking search finished"
        );
        (solution, stats)
    }

    // Recursive backtracking. Depth is bounded by the number of variables,
    // since every level binds exactly one new variable.
    fn search(&self, assignment: Assignment<V, D>, stats: &mut SearchStats) -> Option<Assignment<V, D>> {
        stats.nodes_visited += 1;

        if assignment.len() == self.variables.len() {
            return Some(assignment);
        }

        // First unassigned variable in declaration order.
        let variable = self
            .variables
            .iter()
            .find(|variable| !assignment.contains_key(*variable))?;

        for value in &self.domains[variable] {
            let candidate = assignment.update(variable.clone(), value.clone());
            if self.consistent_recording(variable, &candidate, stats) {
                if let Some(solution) = self.search(candidate, stats) {
                    return Some(solution);
                }
            }
            stats.backtracks += 1;
        }

        None
    }

    fn consistent_recording(
        &self,
        variable: &V,
        assignment: &Assignment<V, D>,
        stats: &mut SearchStats,
    ) -> bool {
        let Some(ids) = self.constraints_for.get(variable) else {
            return true;
        };
        for &id in ids {
            let per_constraint = stats.constraint_stats.entry(id).or_default();
            per_constraint.checks += 1;
            let start_time = std::time::Instant::now();
            let holds = self.constraints[id].satisfied(assignment);
            per_constraint.time_spent_micros += start_time.elapsed().as_micros() as u64;
            if !holds {
                per_constraint.violations += 1;
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::csp::constraint::ConstraintDescriptor;

    #[derive(Debug)]
    struct MinimumValue {
        vars: [&'static str; 1],
        minimum: i64,
    }

    impl MinimumValue {
        fn new(var: &'static str, minimum: i64) -> Self {
            Self {
                vars: [var],
                minimum,
            }
        }
    }

    impl Constraint<&'static str, i64> for MinimumValue {
        fn variables(&self) -> &[&'static str] {
            &self.vars
        }

        fn descriptor(&self) -> ConstraintDescriptor {
            ConstraintDescriptor {
                name: "MinimumValue".to_string(),
                description: format!("?{} > {}", self.vars[0], self.minimum),
            }
        }

        fn satisfied(&self, assignment: &Assignment<&'static str, i64>) -> bool {
            match assignment.get(self.vars[0]) {
                Some(value) => *value > self.minimum,
                // Partial assignment: nothing to check yet.
                None => true,
            }
        }
    }

    #[test]
    fn zero_variables_is_trivially_satisfied() {
        let csp: Csp<&str, i64> = Csp::new(Vec::new(), HashMap::new()).unwrap();
        let solution = csp.backtracking_search().expect("empty problem solves");
        assert!(solution.is_empty());
    }

    #[test]
    fn first_satisfying_domain_value_wins() {
        let domains = HashMap::from([("x", vec![1, 2, 3])]);
        let mut csp = Csp::new(vec!["x"], domains).unwrap();
        csp.add_constraint(Box::new(MinimumValue::new("x", 1))).unwrap();

        let solution = csp.backtracking_search().unwrap();
        // 1 fails the constraint, so 2 is the first value that sticks.
        assert_eq!(solution.get("x"), Some(&2));
    }

    #[test]
    fn empty_domain_means_no_solution() {
        let domains = HashMap::from([("x", Vec::new())]);
        let csp: Csp<&str, i64> = Csp::new(vec!["x"], domains).unwrap();
        assert!(csp.backtracking_search().is_none());
    }

    #[test]
    fn unsatisfiable_constraint_means_no_solution() {
        let domains = HashMap::from([("x", vec![1, 2, 3])]);
        let mut csp = Csp::new(vec!["x"], domains).unwrap();
        csp.add_constraint(Box::new(MinimumValue::new("x", 10))).unwrap();
        let (solution, stats) = csp.solve();
        assert!(solution.is_none());
        assert_eq!(stats.backtracks, 3);
    }

    #[test]
    fn undeclared_variable_fails_at_registration() {
        let domains = HashMap::from([("x", vec![1, 2, 3])]);
        let mut csp = Csp::new(vec!["x"], domains).unwrap();
        let error = csp
            .add_constraint(Box::new(MinimumValue::new("y", 0)))
            .expect_err("y was never declared");
        assert!(matches!(
            error.config(),
            ConfigError::UndeclaredVariable(name) if name.contains('y')
        ));
    }

    #[test]
    fn missing_domain_fails_at_construction() {
        let domains = HashMap::from([("x", vec![1])]);
        let error = Csp::new(vec!["x", "y"], domains).expect_err("y has no domain");
        assert!(matches!(
            error.config(),
            ConfigError::MissingDomain(name) if name.contains('y')
        ));
    }

    #[test]
    fn repeated_runs_return_identical_first_solution() {
        let build = || {
            let domains = HashMap::from([("x", vec![3, 2, 1]), ("y", vec![1, 2, 3])]);
            let mut csp = Csp::new(vec!["x", "y"], domains).unwrap();
            csp.add_constraint(Box::new(MinimumValue::new("x", 1))).unwrap();
            csp.add_constraint(Box::new(MinimumValue::new("y", 2))).unwrap();
            csp
        };
        let first = build().backtracking_search().unwrap();
        let second = build().backtracking_search().unwrap();
        assert_eq!(first, second);
        // Domain order decides: x takes the first listed value that passes.
        assert_eq!(first.get("x"), Some(&3));
        assert_eq!(first.get("y"), Some(&3));
    }

    #[test]
    fn search_resumes_from_partial_assignment() {
        let domains = HashMap::from([("x", vec![1, 2, 3]), ("y", vec![1, 2, 3])]);
        let mut csp = Csp::new(vec!["x", "y"], domains).unwrap();
        csp.add_constraint(Box::new(MinimumValue::new("y", 1))).unwrap();

        let seed = Assignment::new().update("x", 3);
        let solution = csp.backtracking_search_from(seed).unwrap();
        assert_eq!(solution.get("x"), Some(&3));
        assert_eq!(solution.get("y"), Some(&2));
    }
}
