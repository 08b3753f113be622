//! Place words into a random letter grid and print the result.

use std::collections::HashMap;

use clap::Parser;
use segugio::csp::engine::Csp;
use segugio::csp::stats::render_stats_table;
use segugio::problems::word_search::{
    generate_domain, generate_grid, overlay, render_grid, WordSearchConstraint,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Hide words in a random letter grid")]
struct Args {
    #[arg(long, default_value_t = 9)]
    rows: usize,

    #[arg(long, default_value_t = 9)]
    columns: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Words to place.
    #[arg(long, value_delimiter = ',', default_value = "MATTHEW,JOE,MARY,SARAH,SALLY")]
    words: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let words: Vec<String> = args.words.iter().map(|w| w.to_uppercase()).collect();
    let grid = generate_grid(args.rows, args.columns, args.seed);

    let mut domains = HashMap::new();
    for word in &words {
        domains.insert(word.clone(), generate_domain(word, &grid));
    }

    let mut csp = Csp::new(words.clone(), domains).expect("every word has a domain entry");
    csp.add_constraint(Box::new(WordSearchConstraint::new(words)))
        .expect("all constraint variables are declared");

    let (solution, stats) = csp.solve();
    match solution {
        Some(solution) => {
            println!("{}", render_grid(&overlay(&grid, &solution)));
            println!("{}", render_stats_table(&stats, csp.constraints()));
        }
        None => println!("No solution found!"),
    }
}
