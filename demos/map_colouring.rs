//! Colour the map of Australia and report solver statistics.

use segugio::csp::stats::render_stats_table;
use segugio::problems::map_colouring::{australia, REGIONS};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let csp = australia().expect("the map is well formed");
    let (solution, stats) = csp.solve();

    match solution {
        Some(solution) => {
            for region in REGIONS {
                println!("{region}: {:?}", solution[region]);
            }
            println!("\n{}", render_stats_table(&stats, csp.constraints()));
            println!(
                "stats: {}",
                serde_json::to_string_pretty(&stats).expect("stats serialize")
            );
        }
        None => println!("No solution found!"),
    }
}
