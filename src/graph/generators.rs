use crate::graph::{MutableGraph, WeightMatrix};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random dense weight matrix with n vertices.
/// Each ordered pair `i != j` gets an edge with probability `density`,
/// weighted uniformly in `1.0..max_weight`. Self-costs are zero.
pub fn generate_random_dense(n: usize, density: f64, max_weight: f64, seed: u64) -> WeightMatrix<f64> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 1.0, "max_weight must exceed 1.0");

    let mut graph = WeightMatrix::with_vertices(n).expect("n is positive");
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(density.clamp(0.0, 1.0)) {
                graph.add_edge(i, j, rng.gen_range(1.0..max_weight));
            }
        }
    }

    graph
}

/// Generates a random DAG (edges only go from lower to higher index) whose
/// weights may be negative. Having no cycles, it has no negative cycles either.
pub fn generate_random_dag(n: usize, density: f64, seed: u64) -> WeightMatrix<f64> {
    assert!(n > 0, "n must be positive");

    let mut graph = WeightMatrix::with_vertices(n).expect("n is positive");
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(density.clamp(0.0, 1.0)) {
                // Integer-valued so sums stay exact in f64
                let weight = rng.gen_range(-10i32..=20) as f64;
                graph.add_edge(i, j, weight);
            }
        }
    }

    graph
}

/// Generates a 2D grid graph with 8-connectivity.
/// Cardinal moves cost 1.0, diagonal moves cost 1.4, and vertices listed in
/// `blocked` (as `(x, y)`) have no edges at all.
pub fn generate_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> WeightMatrix<f64> {
    assert!(width > 0 && height > 0, "grid must be non-empty");

    let mut graph = WeightMatrix::with_vertices(width * height).expect("grid is non-empty");
    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            if is_blocked(x, y) {
                continue;
            }
            let vertex = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !is_blocked(nx, ny) {
                        graph.add_edge(vertex, ny * width + nx, cost);
                    }
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_random_dense_is_reproducible() {
        let a = generate_random_dense(12, 0.4, 50.0, 7);
        let b = generate_random_dense(12, 0.4, 50.0, 7);
        assert_eq!(a, b);
        assert!(a.validate_non_negative());
        for i in 0..12 {
            assert_eq!(a.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_dag_only_has_forward_edges() {
        let dag = generate_random_dag(10, 0.5, 3);
        for (from, to, _) in dag.edges() {
            assert!(from < to);
        }
    }

    #[test]
    fn test_grid_blocks_obstacles() {
        let grid = generate_grid(3, 3, &[(1, 1)]);
        assert_eq!(grid.outgoing_edges(4).count(), 0);
        assert_eq!(grid.incoming_edges(4).count(), 0);
        // corner (0,0) reaches (1,0) and (0,1) but not the blocked centre
        assert_eq!(grid.outgoing_edges(0).count(), 2);
    }
}
