//! Place rectangular components on a circuit board without overlap.

use std::collections::HashMap;

use clap::Parser;
use segugio::csp::engine::Csp;
use segugio::problems::layout::{generate_domain, render_board, Component, NoOverlapConstraint};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Lay out rectangular components on a board")]
struct Args {
    #[arg(long, default_value_t = 9)]
    rows: usize,

    #[arg(long, default_value_t = 9)]
    columns: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let components = vec![
        Component::new(3, 2),
        Component::new(2, 3),
        Component::new(2, 2),
    ];

    let mut domains = HashMap::new();
    for &component in &components {
        domains.insert(component, generate_domain(component, args.rows, args.columns));
    }

    let mut csp = Csp::new(components.clone(), domains).expect("every component has a domain");
    csp.add_constraint(Box::new(NoOverlapConstraint::new(components)))
        .expect("all constraint variables are declared");

    match csp.backtracking_search() {
        Some(solution) => print!("{}", render_board(args.rows, args.columns, &solution)),
        None => println!("No solution found!"),
    }
}
