//! Circuit-board layout as a CSP: place rectangular components on a board
//! so that no two overlap. Each component is a variable whose domain is
//! every footprint it could occupy.

use serde::{Deserialize, Serialize};

use crate::csp::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Component {
    pub width: usize,
    pub height: usize,
}

impl Component {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BoardLocation {
    pub row: usize,
    pub column: usize,
}

impl BoardLocation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The set of cells a component covers in one placement.
pub type Footprint = Vec<BoardLocation>;

/// Every in-bounds footprint for `component` on a `rows` x `columns` board,
/// scanning top-left corners row-major.
pub fn generate_domain(component: Component, rows: usize, columns: usize) -> Vec<Footprint> {
    let mut domain = Vec::new();
    if component.height > rows || component.width > columns {
        return domain;
    }
    for top in 0..=(rows - component.height) {
        for left in 0..=(columns - component.width) {
            let mut footprint = Vec::with_capacity(component.width * component.height);
            for row in top..top + component.height {
                for column in left..left + component.width {
                    footprint.push(BoardLocation::new(row, column));
                }
            }
            domain.push(footprint);
        }
    }
    domain
}

/// Forbids any two placed components from covering the same cell.
#[derive(Debug, Clone)]
pub struct NoOverlapConstraint {
    pub components: Vec<Component>,
}

impl NoOverlapConstraint {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }
}

impl Constraint<Component, Footprint> for NoOverlapConstraint {
    fn variables(&self) -> &[Component] {
        &self.components
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let sizes = self
            .components
            .iter()
            .map(|c| format!("{}x{}", c.width, c.height))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "NoOverlapConstraint".to_string(),
            description: format!("NoOverlap({sizes})"),
        }
    }

    fn satisfied(&self, assignment: &Assignment<Component, Footprint>) -> bool {
        let mut covered = std::collections::HashSet::new();
        for footprint in assignment.values() {
            for location in footprint {
                if !covered.insert(*location) {
                    return false;
                }
            }
        }
        true
    }
}

/// Draws the board with one letter per component, in sorted component
/// order, and `.` for free cells.
pub fn render_board(
    rows: usize,
    columns: usize,
    solution: &Assignment<Component, Footprint>,
) -> String {
    let mut board = vec![vec!['.'; columns]; rows];
    let mut placed: Vec<(&Component, &Footprint)> = solution.iter().collect();
    placed.sort_by_key(|(component, _)| **component);
    for (index, (_, footprint)) in placed.iter().enumerate() {
        let label = (b'A' + (index % 26) as u8) as char;
        for location in *footprint {
            board[location.row][location.column] = label;
        }
    }
    let mut out = String::new();
    for row in board {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::csp::engine::Csp;

    #[test]
    fn domain_counts_match_board_geometry() {
        // A 2x2 block on a 3x3 board has 4 possible corners.
        let domain = generate_domain(Component::new(2, 2), 3, 3);
        assert_eq!(domain.len(), 4);
        for footprint in &domain {
            assert_eq!(footprint.len(), 4);
        }
    }

    #[test]
    fn oversized_component_has_empty_domain() {
        assert!(generate_domain(Component::new(4, 1), 3, 3).is_empty());
    }

    #[test]
    fn components_are_placed_without_overlap() {
        let components = vec![
            Component::new(3, 2),
            Component::new(2, 3),
            Component::new(2, 2),
        ];
        let mut domains = HashMap::new();
        for &component in &components {
            domains.insert(component, generate_domain(component, 9, 9));
        }

        let mut csp = Csp::new(components.clone(), domains).unwrap();
        csp.add_constraint(Box::new(NoOverlapConstraint::new(components.clone())))
            .unwrap();

        let solution = csp.backtracking_search().expect("a 9x9 board has room");

        let mut covered = std::collections::HashSet::new();
        for component in &components {
            let footprint = solution.get(component).expect("every component is placed");
            assert_eq!(footprint.len(), component.width * component.height);
            for location in footprint {
                assert!(covered.insert(*location), "cell covered twice: {location:?}");
            }
        }
    }

    #[test]
    fn crowded_board_has_no_solution() {
        // Two 2x2 blocks cannot share a 2x2 board.
        let components = vec![Component::new(2, 2), Component::new(1, 2)];
        let mut domains = HashMap::new();
        for &component in &components {
            domains.insert(component, generate_domain(component, 2, 2));
        }
        let mut csp = Csp::new(components.clone(), domains).unwrap();
        csp.add_constraint(Box::new(NoOverlapConstraint::new(components)))
            .unwrap();
        assert!(csp.backtracking_search().is_none());
    }
}
