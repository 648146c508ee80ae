use crate::graph::traits::{Graph, MutableGraph};
use crate::{InvalidInput, Result};
use num_traits::Float;
use std::fmt::Debug;

/// Marker for an absent direct edge: positive infinity.
///
/// Generic code uses `W::infinity()`; this constant is the `f64` spelling for
/// callers that build matrices by hand.
pub const NO_EDGE: f64 = f64::INFINITY;

/// A dense n×n edge-weight matrix indexed `[source][target]`.
///
/// Every constructor and mutator keeps the matrix square, non-empty and free of
/// NaN and `-∞`. Absent edges are stored as `+∞`. Diagonal entries are kept as
/// given; they are self-costs, not edges.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix<W>
where
    W: Float + Debug + Copy,
{
    /// Number of vertices
    size: usize,

    /// Row-major weights, `size * size` entries
    weights: Vec<W>,
}

impl<W> WeightMatrix<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a matrix with `size` vertices, zero self-costs and no edges
    pub fn with_vertices(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(InvalidInput::Empty.into());
        }

        let mut weights = vec![W::infinity(); size * size];
        for i in 0..size {
            weights[i * size + i] = W::zero();
        }

        Ok(WeightMatrix { size, weights })
    }

    /// Builds a matrix from rows, rejecting empty, ragged, NaN and `-∞` input
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(InvalidInput::Empty.into());
        }

        let mut weights = Vec::with_capacity(size * size);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(InvalidInput::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                }
                .into());
            }
            for (column, weight) in cells.into_iter().enumerate() {
                check_weight(weight, row, column)?;
                weights.push(weight);
            }
        }

        Ok(WeightMatrix { size, weights })
    }

    /// Builds a matrix from rows where `marker` stands for an absent edge.
    ///
    /// This is the boundary translation for user-facing sentinels such as `9999`.
    pub fn from_rows_with_marker(rows: Vec<Vec<W>>, marker: W) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|cells| {
                cells
                    .into_iter()
                    .map(|w| if w == marker { W::infinity() } else { w })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Builds a matrix from a row-major buffer of `size * size` weights
    pub fn from_row_major(size: usize, weights: Vec<W>) -> Result<Self> {
        if size == 0 {
            return Err(InvalidInput::Empty.into());
        }
        if weights.len() != size * size {
            return Err(InvalidInput::NotSquare {
                row: weights.len() / size,
                len: weights.len() % size,
                expected: size,
            }
            .into());
        }
        for (idx, &weight) in weights.iter().enumerate() {
            check_weight(weight, idx / size, idx % size)?;
        }

        Ok(WeightMatrix { size, weights })
    }

    /// Number of vertices (the matrix is `size × size`)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of `from → to`, `+∞` if there is no edge.
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> W {
        assert!(from < self.size && to < self.size, "vertex out of range");
        self.weights[from * self.size + to]
    }

    /// Weights of all edges leaving `from`, in target order
    pub fn row(&self, from: usize) -> &[W] {
        &self.weights[from * self.size..(from + 1) * self.size]
    }

    /// The row-major weight buffer
    pub fn as_slice(&self) -> &[W] {
        &self.weights
    }

    /// Copies the matrix out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.weights.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Every real edge `(from, to, weight)`: self-costs and absent edges are skipped.
    ///
    /// This is the edge list a graph visualizer draws.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let size = self.size;
        self.weights
            .iter()
            .enumerate()
            .filter(move |(idx, w)| idx / size != idx % size && **w != W::infinity())
            .map(move |(idx, w)| (idx / size, idx % size, *w))
    }

    /// Validate that the matrix doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.weights.iter().all(|w| *w >= W::zero())
    }
}

fn check_weight<W: Float>(weight: W, row: usize, column: usize) -> std::result::Result<(), InvalidInput> {
    if weight.is_nan() {
        return Err(InvalidInput::NotANumber { row, column });
    }
    if weight == W::neg_infinity() {
        return Err(InvalidInput::NegativeInfinity { row, column });
    }
    Ok(())
}

impl<W> Graph<W> for WeightMatrix<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.size {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter(move |(to, w)| *to != vertex && **w != W::infinity())
                .map(|(to, w)| (to, *w)),
        )
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.size {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (0..self.size)
                .filter(move |from| *from != vertex)
                .map(move |from| (from, self.weights[from * self.size + vertex]))
                .filter(|(_, w)| *w != W::infinity()),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from == to || !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        let weight = self.weights[from * self.size + to];
        if weight == W::infinity() {
            None
        } else {
            Some(weight)
        }
    }
}

impl<W> MutableGraph<W> for WeightMatrix<W>
where
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let old = self.size;
        let size = old + 1;
        let mut weights = vec![W::infinity(); size * size];
        for from in 0..old {
            weights[from * size..from * size + old].copy_from_slice(self.row(from));
        }
        weights[old * size + old] = W::zero();

        self.size = size;
        self.weights = weights;
        old
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || check_weight(weight, from, to).is_err() {
            return false;
        }
        self.weights[from * self.size + to] = weight;
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        let slot = &mut self.weights[from * self.size + to];
        let removed = *slot != W::infinity();
        *slot = W::infinity();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_rows_rejects_malformed_input() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            WeightMatrix::from_rows(empty),
            Err(Error::InvalidInput(InvalidInput::Empty))
        ));

        let ragged = vec![vec![0.0, 1.0], vec![0.0]];
        assert!(matches!(
            WeightMatrix::from_rows(ragged),
            Err(Error::InvalidInput(InvalidInput::NotSquare { row: 1, len: 1, expected: 2 }))
        ));

        let nan = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        assert!(matches!(
            WeightMatrix::from_rows(nan),
            Err(Error::InvalidInput(InvalidInput::NotANumber { row: 0, column: 1 }))
        ));

        let neg_inf = vec![vec![0.0, 1.0], vec![f64::NEG_INFINITY, 0.0]];
        assert!(matches!(
            WeightMatrix::from_rows(neg_inf),
            Err(Error::InvalidInput(InvalidInput::NegativeInfinity { row: 1, column: 0 }))
        ));
    }

    #[test]
    fn test_marker_maps_to_no_edge() {
        let matrix = WeightMatrix::from_rows_with_marker(
            vec![vec![0.0, 9999.0], vec![3.0, 0.0]],
            9999.0,
        )
        .unwrap();
        assert_eq!(matrix.get(0, 1), NO_EDGE);
        assert_eq!(matrix.get(1, 0), 3.0);
        assert!(!matrix.has_edge(0, 1));
        assert!(matrix.has_edge(1, 0));
    }

    #[test]
    fn test_edges_skip_diagonal_and_absent() {
        let matrix = WeightMatrix::from_rows(vec![
            vec![0.0, 2.0, NO_EDGE],
            vec![NO_EDGE, 5.0, 1.0],
            vec![4.0, NO_EDGE, 0.0],
        ])
        .unwrap();

        let edges: Vec<_> = matrix.edges().collect();
        assert_eq!(edges, vec![(0, 1, 2.0), (1, 2, 1.0), (2, 0, 4.0)]);
        assert_eq!(matrix.edge_count(), 3);

        let incoming: Vec<_> = matrix.incoming_edges(0).collect();
        assert_eq!(incoming, vec![(2, 4.0)]);
        let outgoing: Vec<_> = matrix.outgoing_edges(1).collect();
        assert_eq!(outgoing, vec![(2, 1.0)]);
    }

    #[test]
    fn test_mutation_keeps_invariants() {
        let mut matrix: WeightMatrix<f64> = WeightMatrix::with_vertices(2).unwrap();
        assert!(matrix.add_edge(0, 1, 7.0));
        assert!(!matrix.add_edge(0, 2, 1.0));
        assert!(!matrix.add_edge(1, 0, f64::NAN));
        assert!(!matrix.add_edge(1, 0, f64::NEG_INFINITY));

        let v = matrix.add_vertex();
        assert_eq!(v, 2);
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.get(0, 1), 7.0);
        assert_eq!(matrix.get(2, 2), 0.0);
        assert_eq!(matrix.get(2, 0), NO_EDGE);

        assert!(matrix.remove_edge(0, 1));
        assert!(!matrix.remove_edge(0, 1));
        assert_eq!(matrix.edge_count(), 0);
    }
}
