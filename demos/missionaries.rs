//! Narrate the breadth-first solution to missionaries and cannibals.

use segugio::problems::missionaries::McState;
use segugio::search::{engine::bfs, path::node_to_path};
use tracing_subscriber::EnvFilter;

fn describe_move(from: &McState, to: &McState) -> String {
    let missionaries = from.west_missionaries.abs_diff(to.west_missionaries);
    let cannibals = from.west_cannibals.abs_diff(to.west_cannibals);
    let direction = if from.boat_on_west {
        "west to east"
    } else {
        "east to west"
    };
    format!("{missionaries} missionaries and {cannibals} cannibals row from {direction} bank.")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let result = bfs(
        McState::start(),
        |state| state.successors(),
        McState::goal_test,
    );

    let Some(goal_node) = result else {
        println!("No solution found!");
        return;
    };

    let path = node_to_path(&goal_node);
    println!("Solved in {} crossings.\n", path.len() - 1);
    println!("{}\n", path[0]);
    for pair in path.windows(2) {
        println!("{}", describe_move(&pair[0], &pair[1]));
        println!("{}\n", pair[1]);
    }
}
