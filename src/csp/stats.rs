use prettytable::{Cell, Row, Table};

use crate::csp::{
    assignment::{Value, Variable},
    constraint::Constraint,
    engine::{ConstraintId, PerConstraintStats, SearchStats},
};

/// Renders per-constraint counters as a text table, cheapest constraints
/// first.
pub fn render_stats_table<V: Variable, D: Value>(
    stats: &SearchStats,
    constraints: &[Box<dyn Constraint<V, D>>],
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Violations"),
        Cell::new("Time / Check (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|a| a.1.time_spent_micros);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.checks > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.checks as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.violations.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::csp::{assignment::Assignment, constraint::ConstraintDescriptor, engine::Csp};

    #[derive(Debug)]
    struct AlwaysSatisfied {
        vars: [u32; 1],
    }

    impl Constraint<u32, i64> for AlwaysSatisfied {
        fn variables(&self) -> &[u32] {
            &self.vars
        }

        fn descriptor(&self) -> ConstraintDescriptor {
            ConstraintDescriptor {
                name: "AlwaysSatisfied".to_string(),
                description: "?0 unconstrained".to_string(),
            }
        }

        fn satisfied(&self, _assignment: &Assignment<u32, i64>) -> bool {
            true
        }
    }

    #[test]
    fn table_lists_each_checked_constraint() {
        let domains = HashMap::from([(0u32, vec![1i64])]);
        let mut csp = Csp::new(vec![0u32], domains).unwrap();
        csp.add_constraint(Box::new(AlwaysSatisfied { vars: [0] }))
            .unwrap();

        let (solution, stats) = csp.solve();
        assert!(solution.is_some());

        let rendered = render_stats_table(&stats, csp.constraints());
        assert!(rendered.contains("AlwaysSatisfied"));
        assert!(rendered.contains("Checks"));
    }
}
