//! route-matrix - print shortest-path and next-hop tables for a weight matrix.

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use route_matrix::algorithm::{AllPairsAlgorithm, AllPairsResult};
use route_matrix::input::{MatrixParser, DEFAULT_NO_EDGE_MARKER};
use route_matrix::render::{distance_table, format_path, format_weight, successor_table};
use route_matrix::{FloydWarshall, WeightMatrix};

/// All-pairs shortest paths for a small dense directed graph.
///
/// The matrix file has one row per line; `9999`, `inf`, `∞`, `-` or `x` mark
/// a missing edge.
#[derive(Parser)]
#[command(name = "route-matrix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Matrix file, or `-` for stdin
    input: PathBuf,

    /// Numeric value that stands for a missing edge
    #[arg(long, default_value_t = DEFAULT_NO_EDGE_MARKER, conflicts_with = "no_marker")]
    no_edge_marker: f64,

    /// Treat every number literally, with no missing-edge marker
    #[arg(long)]
    no_marker: bool,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Reconstruct the path between two 1-based vertices (repeatable)
    #[arg(long = "path", num_args = 2, value_names = ["FROM", "TO"], action = ArgAction::Append)]
    paths: Vec<usize>,

    /// Enable verbose debug logging
    #[arg(long, short)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let parser = MatrixParser::new()
        .with_no_edge_marker(if cli.no_marker { None } else { Some(cli.no_edge_marker) });

    let weights = if cli.input.as_os_str() == "-" {
        parser.parse_reader(io::stdin().lock()).context("reading matrix from stdin")?
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("opening {}", cli.input.display()))?;
        parser
            .parse_reader(file)
            .with_context(|| format!("parsing {}", cli.input.display()))?
    };

    let queries = to_queries(&cli.paths, weights.size())?;
    let result = FloydWarshall::new().compute(&weights)?;

    match cli.format {
        OutputFormat::Table => print_tables(&result, &queries),
        OutputFormat::Json => print_json(&weights, &result, &queries)?,
    }

    Ok(())
}

/// Converts flat 1-based `--path` values into 0-based pairs
fn to_queries(raw: &[usize], size: usize) -> anyhow::Result<Vec<(usize, usize)>> {
    raw.chunks(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            for v in [from, to] {
                if v == 0 || v > size {
                    bail!("vertex {} is out of range 1..={}", v, size);
                }
            }
            Ok((from - 1, to - 1))
        })
        .collect()
}

fn print_tables(result: &AllPairsResult<f64>, queries: &[(usize, usize)]) {
    println!("Shortest Paths Matrix");
    println!("{}", distance_table(&result.distances));
    println!();
    println!("Successor Matrix");
    println!("{}", successor_table(&result.successors));

    for &(from, to) in queries {
        match result.path(from, to) {
            Some(path) => println!(
                "{} (length {})",
                format_path(&path),
                format_weight(result.distances.get(from, to))
            ),
            None => println!("{} → {}: unreachable", from + 1, to + 1),
        }
    }
}

fn print_json(
    weights: &WeightMatrix<f64>,
    result: &AllPairsResult<f64>,
    queries: &[(usize, usize)],
) -> anyhow::Result<()> {
    let paths: Vec<_> = queries
        .iter()
        .map(|&(from, to)| {
            let path = result.path(from, to);
            let distance = path.as_ref().map(|_| result.distances.get(from, to));
            serde_json::json!({ "from": from, "to": to, "path": path, "distance": distance })
        })
        .collect();

    let edges: Vec<_> = weights
        .edges()
        .map(|(source, target, weight)| {
            serde_json::json!({ "source": source, "target": target, "weight": weight })
        })
        .collect();

    let output = serde_json::json!({
        "vertex_count": weights.size(),
        "distances": result.distances.to_option_rows()?,
        "successors": result.successors.to_rows(),
        "paths": paths,
        "edges": edges,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
