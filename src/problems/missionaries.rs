//! The missionaries-and-cannibals river crossing, as a search-engine client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Everyone starts on the west bank and must reach the east bank.
pub const MAX_NUM: u8 = 3;

/// Bank populations, tracked from the west side; the east side is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct McState {
    pub west_missionaries: u8,
    pub west_cannibals: u8,
    pub boat_on_west: bool,
}

impl McState {
    pub fn new(missionaries: u8, cannibals: u8, boat_on_west: bool) -> Self {
        Self {
            west_missionaries: missionaries,
            west_cannibals: cannibals,
            boat_on_west,
        }
    }

    /// The canonical starting position: everyone west, boat west.
    pub fn start() -> Self {
        Self::new(MAX_NUM, MAX_NUM, true)
    }

    pub fn east_missionaries(&self) -> u8 {
        MAX_NUM - self.west_missionaries
    }

    pub fn east_cannibals(&self) -> u8 {
        MAX_NUM - self.west_cannibals
    }

    /// Missionaries may never be outnumbered by cannibals on a bank they
    /// occupy.
    pub fn is_legal(&self) -> bool {
        if self.west_missionaries < self.west_cannibals && self.west_missionaries > 0 {
            return false;
        }
        if self.east_missionaries() < self.east_cannibals() && self.east_missionaries() > 0 {
            return false;
        }
        true
    }

    pub fn goal_test(&self) -> bool {
        self.is_legal() && self.west_missionaries == 0 && self.west_cannibals == 0
    }

    /// Every legal state reachable by ferrying one or two people across.
    pub fn successors(&self) -> Vec<McState> {
        let McState {
            west_missionaries: wm,
            west_cannibals: wc,
            boat_on_west,
        } = *self;
        let mut states = Vec::new();
        if boat_on_west {
            if wm > 1 {
                states.push(McState::new(wm - 2, wc, false));
            }
            if wm > 0 {
                states.push(McState::new(wm - 1, wc, false));
            }
            if wc > 1 {
                states.push(McState::new(wm, wc - 2, false));
            }
            if wc > 0 {
                states.push(McState::new(wm, wc - 1, false));
            }
            if wm > 0 && wc > 0 {
                states.push(McState::new(wm - 1, wc - 1, false));
            }
        } else {
            if wm + 2 <= MAX_NUM {
                states.push(McState::new(wm + 2, wc, true));
            }
            if wm + 1 <= MAX_NUM {
                states.push(McState::new(wm + 1, wc, true));
            }
            if wc + 2 <= MAX_NUM {
                states.push(McState::new(wm, wc + 2, true));
            }
            if wc + 1 <= MAX_NUM {
                states.push(McState::new(wm, wc + 1, true));
            }
            if wm + 1 <= MAX_NUM && wc + 1 <= MAX_NUM {
                states.push(McState::new(wm + 1, wc + 1, true));
            }
        }
        states.retain(McState::is_legal);
        states
    }
}

impl fmt::Display for McState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "On the west bank there are {} missionaries and {} cannibals.",
            self.west_missionaries, self.west_cannibals
        )?;
        writeln!(
            f,
            "On the east bank there are {} missionaries and {} cannibals.",
            self.east_missionaries(),
            self.east_cannibals()
        )?;
        write!(
            f,
            "The boat is on the {} bank.",
            if self.boat_on_west { "west" } else { "east" }
        )
    }
}
