use std::fmt::Debug;
use num_traits::Float;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::graph::{Graph, WeightMatrix};
use crate::algorithm::{AllPairsAlgorithm, AllPairsResult, DistanceMatrix, SuccessorMatrix};
use crate::data_structures::LazyMinQueue;
use crate::{Error, Result};

/// All-pairs shortest paths by running Dijkstra's algorithm from every vertex.
///
/// Only accepts non-negative weights. It serves as an independent check on
/// [`crate::FloydWarshall`]: distances agree exactly, successors may differ
/// where two shortest paths have the same length.
#[derive(Debug, Default, Clone, Copy)]
pub struct RepeatedDijkstra {
    /// Run the per-source searches on the rayon pool
    parallel: bool,
}

impl RepeatedDijkstra {
    /// Creates a new sequential instance
    pub fn new() -> Self {
        RepeatedDijkstra { parallel: false }
    }

    /// Enable or disable running sources in parallel
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Shortest distances and first hops from a single source.
    ///
    /// The self-distance follows the matrix convention: the stored self-cost,
    /// or a shorter cycle back to the source if one exists.
    fn single_source<W>(&self, weights: &WeightMatrix<W>, source: usize) -> (Vec<W>, Vec<usize>)
    where
        W: Float + Debug + Copy,
    {
        let n = weights.size();

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut order = Vec::with_capacity(n);

        distances[source] = W::zero();

        let mut queue = LazyMinQueue::new(n);
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            order.push(u);

            // Relax all outgoing edges
            for (v, weight) in weights.outgoing_edges(u) {
                if queue.is_settled(v) {
                    continue;
                }
                let new_dist = dist_u + weight;
                if new_dist < distances[v] {
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                    queue.push(v, OrderedFloat(new_dist));
                }
            }
        }

        // First hop of every settled vertex; predecessors settle first
        let mut successors: Vec<usize> = (0..n).collect();
        for &v in order.iter().skip(1) {
            if let Some(pred) = predecessors[v] {
                successors[v] = if pred == source { v } else { successors[pred] };
            }
        }

        // Close the loop back to the source if that beats the self-cost
        let mut self_distance = weights.get(source, source);
        let mut self_successor = source;
        for (t, weight) in weights.incoming_edges(source) {
            let cycle = distances[t] + weight;
            if distances[t] != W::infinity() && cycle < self_distance {
                self_distance = cycle;
                self_successor = successors[t];
            }
        }
        distances[source] = self_distance;
        successors[source] = self_successor;

        (distances, successors)
    }
}

impl<W> AllPairsAlgorithm<W> for RepeatedDijkstra
where
    W: Float + Debug + Copy + Send + Sync,
{
    fn name(&self) -> &'static str {
        "Repeated Dijkstra"
    }

    fn compute(&self, weights: &WeightMatrix<W>) -> Result<AllPairsResult<W>> {
        if let Some(negative) = weights.as_slice().iter().find(|w| **w < W::zero()) {
            return Err(Error::NegativeWeight(negative.to_f64().unwrap_or(f64::NAN)));
        }

        let n = weights.size();
        let rows: Vec<(Vec<W>, Vec<usize>)> = if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|source| self.single_source(weights, source))
                .collect()
        } else {
            (0..n).map(|source| self.single_source(weights, source)).collect()
        };

        let mut distances = Vec::with_capacity(n * n);
        let mut successors = Vec::with_capacity(n * n);
        for (dist_row, succ_row) in rows {
            distances.extend(dist_row);
            successors.extend(succ_row);
        }

        log::debug!("repeated dijkstra: {} sources (parallel: {})", n, self.parallel);

        Ok(AllPairsResult {
            distances: DistanceMatrix::from_row_major(n, distances),
            successors: SuccessorMatrix::from_row_major(n, successors),
        })
    }
}
