//! Prints the routing table of a small road network, one source at a time.
//!
//! Run with `cargo run --example route_table`.

use colored::*;
use route_matrix::algorithm::AllPairsAlgorithm;
use route_matrix::input::MatrixParser;
use route_matrix::render::{format_path, format_weight};
use route_matrix::FloydWarshall;

const ROADS: &str = "\
0    4    9999 9999 1
9999 0    2    9999 9999
9999 9999 0    3    9999
6    9999 9999 0    9999
9999 2    9999 5    0
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let weights = MatrixParser::new().parse_str(ROADS)?;
    let result = FloydWarshall::new().compute(&weights)?;
    let n = weights.size();

    println!("{}", "Routing table".bold());
    for from in 0..n {
        println!("\n{} {}", "From".cyan(), (from + 1).to_string().cyan().bold());
        for to in (0..n).filter(|&to| to != from) {
            match result.path(from, to) {
                Some(path) => println!(
                    "  to {}: next hop {}, {} ({})",
                    to + 1,
                    (result.successors.get(from, to) + 1).to_string().green(),
                    format_path(&path),
                    format_weight(result.distances.get(from, to)).yellow()
                ),
                None => println!("  to {}: {}", to + 1, "unreachable".red()),
            }
        }
    }

    Ok(())
}
