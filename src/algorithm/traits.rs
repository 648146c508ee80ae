use std::fmt::Debug;
use num_traits::Float;
use crate::graph::{Graph, WeightMatrix};
use crate::{Error, Result};

/// Shortest-path lengths between every ordered pair of vertices.
///
/// Unreachable pairs hold `+∞`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W>
where
    W: Float + Debug + Copy,
{
    size: usize,
    distances: Vec<W>,
}

impl<W> DistanceMatrix<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) fn from_row_major(size: usize, distances: Vec<W>) -> Self {
        debug_assert_eq!(distances.len(), size * size);
        DistanceMatrix { size, distances }
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the shortest path `from → to`, `+∞` if unreachable.
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> W {
        assert!(from < self.size && to < self.size, "vertex out of range");
        self.distances[from * self.size + to]
    }

    pub fn row(&self, from: usize) -> &[W] {
        &self.distances[from * self.size..(from + 1) * self.size]
    }

    /// Returns true if some path `from → to` exists
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to) != W::infinity()
    }

    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.distances.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Rows with unreachable entries as `None`.
    ///
    /// Fails with [`Error::DistanceOverflow`] if a negative cycle drove some
    /// distance to `-∞`, which would otherwise be indistinguishable from
    /// `None` once serialized.
    pub fn to_option_rows(&self) -> Result<Vec<Vec<Option<W>>>> {
        if let Some(idx) = self.distances.iter().position(|d| *d == W::neg_infinity()) {
            return Err(Error::DistanceOverflow {
                from: idx / self.size,
                to: idx % self.size,
            });
        }

        Ok(self
            .distances
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|d| if *d == W::infinity() { None } else { Some(*d) })
                    .collect()
            })
            .collect())
    }
}

/// Next hop on the shortest path between every ordered pair of vertices.
///
/// `get(i, j)` is the vertex to visit right after `i` when walking to `j`.
/// Unreachable pairs keep the nominal successor `j`; check
/// [`DistanceMatrix::is_reachable`] before trusting an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorMatrix {
    size: usize,
    successors: Vec<usize>,
}

impl SuccessorMatrix {
    pub(crate) fn from_row_major(size: usize, successors: Vec<usize>) -> Self {
        debug_assert_eq!(successors.len(), size * size);
        SuccessorMatrix { size, successors }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> usize {
        assert!(from < self.size && to < self.size, "vertex out of range");
        self.successors[from * self.size + to]
    }

    pub fn row(&self, from: usize) -> &[usize] {
        &self.successors[from * self.size..(from + 1) * self.size]
    }

    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.successors.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}

/// Result of an all-pairs shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<W>
where
    W: Float + Debug + Copy,
{
    /// Shortest-path lengths
    pub distances: DistanceMatrix<W>,

    /// Next hops for path reconstruction
    pub successors: SuccessorMatrix,
}

impl<W> AllPairsResult<W>
where
    W: Float + Debug + Copy,
{
    /// Number of vertices
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// Rebuilds the shortest path `from → to` as a vertex sequence.
    ///
    /// Returns `None` for out-of-range vertices and unreachable pairs. A walk
    /// longer than `n - 1` hops can only come from a negative cycle; it is
    /// abandoned and also yields `None`.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let n = self.size();
        if from >= n || to >= n || !self.distances.is_reachable(from, to) {
            return None;
        }

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            if path.len() > n - 1 {
                log::warn!(
                    "path {} -> {} did not close after {} hops, likely a negative cycle",
                    from,
                    to,
                    n - 1
                );
                return None;
            }
            current = self.successors.get(current, to);
            path.push(current);
        }

        Some(path)
    }

    /// Sums the direct edge weights along `path`.
    ///
    /// Returns `None` if a hop has no edge in `weights`. A single-vertex path
    /// weighs zero.
    pub fn path_weight(weights: &WeightMatrix<W>, path: &[usize]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, hop| {
            weights.get_edge_weight(hop[0], hop[1]).map(|w| total + w)
        })
    }
}

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsAlgorithm<W>
where
    W: Float + Debug + Copy,
{
    /// Compute shortest paths between every ordered pair of vertices
    fn compute(&self, weights: &WeightMatrix<W>) -> Result<AllPairsResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
