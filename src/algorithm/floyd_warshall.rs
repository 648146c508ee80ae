use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::{AllPairsAlgorithm, AllPairsResult, DistanceMatrix, SuccessorMatrix};
use crate::graph::WeightMatrix;
use crate::Result;

/// Floyd–Warshall all-pairs shortest paths over a dense weight matrix.
///
/// Runs in O(n³) time and O(n²) space. Negative weights are accepted and
/// negative cycles are not detected: distances on such cycles simply drop
/// below their trivial values and the computation still terminates.
///
/// Ties between equal-length paths keep the first intermediate vertex that
/// produced them, so for a given input the successor matrix is fully
/// deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd–Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }
}

impl<W> AllPairsAlgorithm<W> for FloydWarshall
where
    W: Float + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute(&self, weights: &WeightMatrix<W>) -> Result<AllPairsResult<W>> {
        let n = weights.size();
        let inf = W::infinity();

        let mut dist = weights.as_slice().to_vec();
        // Direct hop for every pair, edge or not
        let mut next: Vec<usize> = (0..n * n).map(|idx| idx % n).collect();
        let mut updates = 0usize;

        for k in 0..n {
            for i in 0..n {
                // An unreachable first leg stays unreachable for the whole row
                if dist[i * n + k] == inf {
                    continue;
                }
                let via = next[i * n + k];

                for j in 0..n {
                    // Re-read: a negative self-cost at k can lower it mid-row
                    let d_ik = dist[i * n + k];
                    let d_kj = dist[k * n + j];
                    if d_kj == inf {
                        continue;
                    }
                    let candidate = d_ik + d_kj;
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                        next[i * n + j] = via;
                        updates += 1;
                    }
                }
            }
        }

        log::debug!(
            "floyd-warshall: {} vertices, {} relaxations applied",
            n,
            updates
        );

        Ok(AllPairsResult {
            distances: DistanceMatrix::from_row_major(n, dist),
            successors: SuccessorMatrix::from_row_major(n, next),
        })
    }
}

/// Validates raw rows and runs Floyd–Warshall on them.
///
/// Fails with [`crate::Error::InvalidInput`] for empty, non-square, NaN or
/// `-∞` input before any computation starts.
pub fn compute_all_pairs_shortest_paths<W>(rows: Vec<Vec<W>>) -> Result<AllPairsResult<W>>
where
    W: Float + Debug + Copy,
{
    let weights = WeightMatrix::from_rows(rows)?;
    FloydWarshall::new().compute(&weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, InvalidInput, NO_EDGE};

    #[test]
    fn test_single_vertex() {
        let result = compute_all_pairs_shortest_paths(vec![vec![0.0]]).unwrap();
        assert_eq!(result.distances.to_rows(), vec![vec![0.0]]);
        assert_eq!(result.successors.to_rows(), vec![vec![0]]);
    }

    #[test]
    fn test_single_vertex_keeps_self_cost() {
        let result = compute_all_pairs_shortest_paths(vec![vec![4.5]]).unwrap();
        assert_eq!(result.distances.get(0, 0), 4.5);
        assert_eq!(result.successors.get(0, 0), 0);
    }

    #[test]
    fn test_no_edges_keep_nominal_successors() {
        let result =
            compute_all_pairs_shortest_paths(vec![vec![0.0, NO_EDGE], vec![NO_EDGE, 0.0]]).unwrap();
        assert_eq!(result.distances.to_rows(), vec![vec![0.0, NO_EDGE], vec![NO_EDGE, 0.0]]);
        assert_eq!(result.successors.to_rows(), vec![vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn test_triangle_goes_through_middle_vertex() {
        let result = compute_all_pairs_shortest_paths(vec![
            vec![0.0, 1.0, 5.0],
            vec![NO_EDGE, 0.0, 1.0],
            vec![NO_EDGE, NO_EDGE, 0.0],
        ])
        .unwrap();
        assert_eq!(result.distances.get(0, 2), 2.0);
        assert_eq!(result.successors.get(0, 2), 1);
        assert_eq!(result.path(0, 2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_first_intermediate_wins_ties() {
        // 0 -> 3 costs 2 both via 1 and via 2; k = 1 is seen first
        let result = compute_all_pairs_shortest_paths(vec![
            vec![0.0, 1.0, 1.0, NO_EDGE],
            vec![NO_EDGE, 0.0, NO_EDGE, 1.0],
            vec![NO_EDGE, NO_EDGE, 0.0, 1.0],
            vec![NO_EDGE, NO_EDGE, NO_EDGE, 0.0],
        ])
        .unwrap();
        assert_eq!(result.distances.get(0, 3), 2.0);
        assert_eq!(result.successors.get(0, 3), 1);
    }

    #[test]
    fn test_equal_direct_edge_is_not_replaced() {
        let result = compute_all_pairs_shortest_paths(vec![
            vec![0.0, 1.0, 2.0],
            vec![NO_EDGE, 0.0, 1.0],
            vec![NO_EDGE, NO_EDGE, 0.0],
        ])
        .unwrap();
        assert_eq!(result.distances.get(0, 2), 2.0);
        assert_eq!(result.successors.get(0, 2), 2);
    }

    #[test]
    fn test_negative_cycle_terminates() {
        let result = compute_all_pairs_shortest_paths(vec![
            vec![0.0, 1.0, NO_EDGE],
            vec![-3.0, 0.0, 1.0],
            vec![NO_EDGE, NO_EDGE, 0.0],
        ])
        .unwrap();
        assert!(result.distances.get(0, 0) < 0.0);
        assert!(result.distances.get(1, 1) < 0.0);
        assert_eq!(result.distances.get(2, 0), NO_EDGE);
        assert!(result.distances.row(0).iter().all(|d| !d.is_nan()));
    }

    #[test]
    fn test_rejects_malformed_rows() {
        let err = compute_all_pairs_shortest_paths(vec![vec![0.0, 1.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InvalidInput::NotSquare { .. })));

        let err = compute_all_pairs_shortest_paths::<f64>(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InvalidInput::Empty)));
    }

    #[test]
    fn test_works_with_f32() {
        let result = compute_all_pairs_shortest_paths(vec![
            vec![0.0f32, 2.0],
            vec![f32::INFINITY, 0.0],
        ])
        .unwrap();
        assert_eq!(result.distances.get(0, 1), 2.0f32);
        assert!(!result.distances.is_reachable(1, 0));
    }
}
