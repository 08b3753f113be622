//! Colouring the map of Australia with three colours, built entirely from
//! the stock [`NotEqualConstraint`].

use serde::{Deserialize, Serialize};

use crate::csp::constraints::not_equal::NotEqualConstraint;
use crate::csp::engine::Csp;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

pub const REGIONS: [&str; 7] = [
    "Western Australia",
    "Northern Territory",
    "South Australia",
    "Queensland",
    "New South Wales",
    "Victoria",
    "Tasmania",
];

pub const ADJACENCIES: [(&str, &str); 9] = [
    ("Western Australia", "Northern Territory"),
    ("Western Australia", "South Australia"),
    ("Northern Territory", "South Australia"),
    ("Northern Territory", "Queensland"),
    ("South Australia", "Queensland"),
    ("South Australia", "New South Wales"),
    ("South Australia", "Victoria"),
    ("Queensland", "New South Wales"),
    ("New South Wales", "Victoria"),
];

/// The fully-wired problem: every region may take any colour, adjacent
/// regions must differ.
pub fn australia() -> Result<Csp<&'static str, Colour>> {
    let variables: Vec<&'static str> = REGIONS.to_vec();
    let domains = variables
        .iter()
        .map(|&region| (region, vec![Colour::Red, Colour::Green, Colour::Blue]))
        .collect();

    let mut csp = Csp::new(variables, domains)?;
    for (a, b) in ADJACENCIES {
        csp.add_constraint(Box::new(NotEqualConstraint::new(a, b)))?;
    }
    Ok(csp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn australia_is_three_colourable() {
        let csp = australia().unwrap();
        let solution = csp.backtracking_search().expect("a colouring exists");

        for region in REGIONS {
            assert!(solution.contains_key(region), "{region} left uncoloured");
        }
        for (a, b) in ADJACENCIES {
            assert_ne!(
                solution.get(a),
                solution.get(b),
                "{a} and {b} share a colour"
            );
        }
    }

    #[test]
    fn colouring_is_deterministic() {
        let first = australia().unwrap().backtracking_search().unwrap();
        let second = australia().unwrap().backtracking_search().unwrap();
        assert_eq!(first, second);
    }
}
