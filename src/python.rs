use crate::algorithm::AllPairsAlgorithm;
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::graph::WeightMatrix;
use pyo3::prelude::*;

fn to_matrix(weights: Vec<Vec<f64>>, no_edge_marker: Option<f64>) -> PyResult<WeightMatrix<f64>> {
    let matrix = match no_edge_marker {
        Some(marker) => WeightMatrix::from_rows_with_marker(weights, marker),
        None => WeightMatrix::from_rows(weights),
    };
    matrix.map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Returns `(distances, successors)`; unreachable distances are `None`.
#[pyfunction]
#[pyo3(signature = (weights, no_edge_marker = None))]
fn all_pairs_shortest_paths(
    weights: Vec<Vec<f64>>,
    no_edge_marker: Option<f64>,
) -> PyResult<(Vec<Vec<Option<f64>>>, Vec<Vec<usize>>)> {
    let matrix = to_matrix(weights, no_edge_marker)?;
    let result = FloydWarshall::new()
        .compute(&matrix)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))?;
    let distances = result
        .distances
        .to_option_rows()
        .map_err(|e| pyo3::exceptions::PyArithmeticError::new_err(e.to_string()))?;
    Ok((distances, result.successors.to_rows()))
}

/// Returns the vertex sequence of a shortest path, or `None` if unreachable
#[pyfunction]
#[pyo3(signature = (weights, source, target, no_edge_marker = None))]
fn shortest_path(
    weights: Vec<Vec<f64>>,
    source: usize,
    target: usize,
    no_edge_marker: Option<f64>,
) -> PyResult<Option<Vec<usize>>> {
    let matrix = to_matrix(weights, no_edge_marker)?;
    if source >= matrix.size() || target >= matrix.size() {
        return Err(pyo3::exceptions::PyIndexError::new_err("vertex out of range"));
    }
    let result = FloydWarshall::new()
        .compute(&matrix)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))?;
    Ok(result.path(source, target))
}

#[pymodule]
fn route_matrix_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(all_pairs_shortest_paths, m)?)?;
    m.add_function(wrap_pyfunction!(shortest_path, m)?)?;
    Ok(())
}
