//! Example problem domains. Each owns its state representation, rules, and
//! rendering, and talks to the engines only through the callback contracts:
//! successors/goal test/heuristic for search, variables/domains/constraints
//! for CSP.

pub mod layout;
pub mod map_colouring;
pub mod maze;
pub mod missionaries;
pub mod word_search;
