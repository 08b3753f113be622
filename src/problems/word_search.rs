//! Word-search grid filling as a CSP: each word is a variable, its domain
//! is every run of cells that could hold it, and one constraint forbids two
//! words from sharing a cell.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::csp::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
};

pub type Grid = Vec<Vec<char>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridLocation {
    pub row: usize,
    pub column: usize,
}

impl GridLocation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A grid of random uppercase letters; the seed makes it reproducible.
pub fn generate_grid(rows: usize, columns: usize, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..columns).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect())
        .collect()
}

pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Every in-bounds run of cells that could hold `word`: rightward, downward,
/// and both downward diagonals.
pub fn generate_domain(word: &str, grid: &Grid) -> Vec<Vec<GridLocation>> {
    let mut domain = Vec::new();
    let height = grid.len();
    let width = if height > 0 { grid[0].len() } else { 0 };
    let length = word.chars().count();

    for row in 0..height {
        for column in 0..width {
            if column + length <= width {
                // Left to right.
                domain.push(
                    (column..column + length)
                        .map(|c| GridLocation::new(row, c))
                        .collect(),
                );
                if row + length <= height {
                    // Diagonal towards bottom-right.
                    domain.push(
                        (0..length)
                            .map(|offset| GridLocation::new(row + offset, column + offset))
                            .collect(),
                    );
                }
            }
            if row + length <= height {
                // Top to bottom.
                domain.push(
                    (row..row + length)
                        .map(|r| GridLocation::new(r, column))
                        .collect(),
                );
                if column + 1 >= length {
                    // Diagonal towards bottom-left.
                    domain.push(
                        (0..length)
                            .map(|offset| GridLocation::new(row + offset, column - offset))
                            .collect(),
                    );
                }
            }
        }
    }

    domain
}

/// Forbids any two placed words from occupying the same cell.
#[derive(Debug, Clone)]
pub struct WordSearchConstraint {
    pub words: Vec<String>,
}

impl WordSearchConstraint {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl Constraint<String, Vec<GridLocation>> for WordSearchConstraint {
    fn variables(&self) -> &[String] {
        &self.words
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "WordSearchConstraint".to_string(),
            description: format!("NoOverlap({})", self.words.join(", ")),
        }
    }

    fn satisfied(&self, assignment: &Assignment<String, Vec<GridLocation>>) -> bool {
        let all_locations: Vec<GridLocation> = assignment
            .values()
            .flat_map(|locations| locations.iter().copied())
            .collect();
        let distinct: std::collections::HashSet<GridLocation> =
            all_locations.iter().copied().collect();
        distinct.len() == all_locations.len()
    }
}

/// Writes each placed word's letters over the grid it was solved against.
pub fn overlay(grid: &Grid, solution: &Assignment<String, Vec<GridLocation>>) -> Grid {
    let mut filled = grid.clone();
    for (word, locations) in solution {
        for (letter, location) in word.chars().zip(locations) {
            filled[location.row][location.column] = letter;
        }
    }
    filled
}
