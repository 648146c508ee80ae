use std::time::{Duration, Instant};
use route_matrix::algorithm::AllPairsAlgorithm;
use route_matrix::graph::generators::generate_random_dense;
use route_matrix::graph::{Graph, WeightMatrix};
use route_matrix::{FloydWarshall, RepeatedDijkstra};

// Function to benchmark an algorithm on a weight matrix
fn benchmark_algorithm<A>(algorithm: &A, weights: &WeightMatrix<f64>) -> Duration
where
    A: AllPairsAlgorithm<f64>,
{
    println!("Running {} on {} vertices...", algorithm.name(), weights.size());

    let start = Instant::now();
    let result = match algorithm.compute(weights) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - {} failed: {}", algorithm.name(), err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    // Count reachable ordered pairs
    let n = weights.size();
    let reachable = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| result.distances.is_reachable(i, j))
        .count();
    println!("  - {} reachable pairs in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    // Dense all-pairs work is cubic, so sizes stay modest
    let sizes = [50, 100, 200, 400];
    let density = 0.3;

    println!("=====================================================");
    println!("Benchmark: Floyd-Warshall vs Repeated Dijkstra");
    println!("Edge density: {}", density);
    println!("=====================================================");

    let floyd = FloydWarshall::new();
    let dijkstra = RepeatedDijkstra::new();
    let dijkstra_parallel = RepeatedDijkstra::new().with_parallel(true);

    let mut results = Vec::new();

    for (seed, &size) in sizes.iter().enumerate() {
        let weights = generate_random_dense(size, density, 100.0, seed as u64);
        println!("\nMatrix with {} vertices and {} edges", size, weights.edge_count());

        let floyd_time = benchmark_algorithm(&floyd, &weights);
        let dijkstra_time = benchmark_algorithm(&dijkstra, &weights);
        let parallel_time = benchmark_algorithm(&dijkstra_parallel, &weights);

        results.push((size, floyd_time, dijkstra_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<14} | {:<14}",
             "Vertices", "Floyd (ms)", "Dijkstra (ms)", "Dijkstra-par (ms)");
    println!("-----------------------------------------------------");

    for (size, floyd_time, dijkstra_time, parallel_time) in &results {
        println!("{:<10} | {:<12.2} | {:<14.2} | {:<14.2}",
                 size,
                 floyd_time.as_secs_f64() * 1000.0,
                 dijkstra_time.as_secs_f64() * 1000.0,
                 parallel_time.as_secs_f64() * 1000.0);
    }
}
