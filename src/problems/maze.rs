//! Grid-maze pathfinding: the canonical consumer of the search engine.
//!
//! The maze owns its grid, blocking rules, and rendering; the search engine
//! only ever sees the `successors` / `goal_test` / distance callbacks.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Blocked => 'X',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Path => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MazeLocation {
    pub row: usize,
    pub column: usize,
}

impl MazeLocation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A rectangular grid with randomly blocked cells.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    columns: usize,
    pub start: MazeLocation,
    pub goal: MazeLocation,
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    /// Builds a maze, blocking each cell independently with probability
    /// `sparseness`. The RNG is seeded so a given seed reproduces the same
    /// maze.
    pub fn new(
        rows: usize,
        columns: usize,
        start: MazeLocation,
        goal: MazeLocation,
        sparseness: f64,
        seed: u64,
    ) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = vec![vec![Cell::Empty; columns]; rows];
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen_range(0.0..1.0) < sparseness {
                    *cell = Cell::Blocked;
                }
            }
        }
        // Start and goal are never blocked.
        grid[start.row][start.column] = Cell::Start;
        grid[goal.row][goal.column] = Cell::Goal;
        Self {
            rows,
            columns,
            start,
            goal,
            grid,
        }
    }

    /// A 10x10 maze from corner to corner, the classic demo configuration.
    pub fn standard(sparseness: f64, seed: u64) -> Self {
        Self::new(
            10,
            10,
            MazeLocation::new(0, 0),
            MazeLocation::new(9, 9),
            sparseness,
            seed,
        )
    }

    pub fn goal_test(&self, location: &MazeLocation) -> bool {
        *location == self.goal
    }

    /// The up-to-four orthogonal neighbors that are in bounds and not
    /// blocked.
    pub fn successors(&self, location: &MazeLocation) -> Vec<MazeLocation> {
        let MazeLocation { row, column } = *location;
        let mut locations = Vec::with_capacity(4);
        if row + 1 < self.rows && self.grid[row + 1][column] != Cell::Blocked {
            locations.push(MazeLocation::new(row + 1, column));
        }
        if row > 0 && self.grid[row - 1][column] != Cell::Blocked {
            locations.push(MazeLocation::new(row - 1, column));
        }
        if column + 1 < self.columns && self.grid[row][column + 1] != Cell::Blocked {
            locations.push(MazeLocation::new(row, column + 1));
        }
        if column > 0 && self.grid[row][column - 1] != Cell::Blocked {
            locations.push(MazeLocation::new(row, column - 1));
        }
        locations
    }

    /// Paints a solution path onto the grid, keeping start and goal visible.
    pub fn mark(&mut self, path: &[MazeLocation]) {
        for location in path {
            self.grid[location.row][location.column] = Cell::Path;
        }
        self.grid[self.start.row][self.start.column] = Cell::Start;
        self.grid[self.goal.row][self.goal.column] = Cell::Goal;
    }

    /// Undoes [`Maze::mark`].
    pub fn clear(&mut self, path: &[MazeLocation]) {
        for location in path {
            self.grid[location.row][location.column] = Cell::Empty;
        }
        self.grid[self.start.row][self.start.column] = Cell::Start;
        self.grid[self.goal.row][self.goal.column] = Cell::Goal;
    }

    /// Straight-line distance to `goal`. Admissible for unit-cost moves.
    pub fn euclidean_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> f64 {
        move |location| {
            let xdist = location.column as f64 - goal.column as f64;
            let ydist = location.row as f64 - goal.row as f64;
            (xdist * xdist + ydist * ydist).sqrt()
        }
    }

    /// Taxicab distance to `goal`. Admissible (and tighter than euclidean)
    /// on a 4-neighborhood grid.
    pub fn manhattan_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> f64 {
        move |location| {
            let xdist = location.column.abs_diff(goal.column);
            let ydist = location.row.abs_diff(goal.row);
            (xdist + ydist) as f64
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
