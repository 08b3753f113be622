//! Solve a random maze with all three searches and show each route.

use clap::Parser;
use segugio::problems::maze::{Maze, MazeLocation};
use segugio::search::{
    engine::{astar, bfs, dfs},
    node::Node,
    path::node_to_path,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Solve a random maze with dfs, bfs and astar")]
struct Args {
    #[arg(long, default_value_t = 10)]
    rows: usize,

    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Probability that any one cell is blocked.
    #[arg(long, default_value_t = 0.2)]
    sparseness: f64,

    /// RNG seed; the same seed reproduces the same maze.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn show(maze: &mut Maze, label: &str, result: Option<Arc<Node<MazeLocation>>>) {
    match result {
        Some(node) => {
            let path = node_to_path(&node);
            maze.mark(&path);
            println!("{label} found a path of {} steps:\n{maze}", path.len() - 1);
            maze.clear(&path);
        }
        None => println!("{label} found no path."),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let start = MazeLocation::new(0, 0);
    let goal = MazeLocation::new(args.rows - 1, args.columns - 1);
    let mut maze = Maze::new(
        args.rows,
        args.columns,
        start,
        goal,
        args.sparseness,
        args.seed,
    );

    println!("{maze}");

    let dfs_result = dfs(start, |ml| maze.successors(ml), |ml| maze.goal_test(ml));
    show(&mut maze, "dfs", dfs_result);

    let bfs_result = bfs(start, |ml| maze.successors(ml), |ml| maze.goal_test(ml));
    show(&mut maze, "bfs", bfs_result);

    let astar_result = astar(
        start,
        |ml| maze.goal_test(ml),
        |ml| maze.successors(ml),
        Maze::manhattan_distance(goal),
    );
    show(&mut maze, "astar", astar_result);
}
