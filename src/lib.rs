//! Route Matrix - All-Pairs Shortest Paths over Dense Weight Matrices
//!
//! This library computes, for a small dense directed graph given as an n×n
//! edge-weight matrix, the shortest-path distance between every ordered pair of
//! vertices together with a successor (next-hop) matrix from which any shortest
//! path can be rebuilt.
//!
//! The core is the Floyd–Warshall dynamic program in [`FloydWarshall`]. Absent
//! edges are represented by `+∞` ([`NO_EDGE`]); finite application sentinels
//! such as `9999` are translated at the boundary ([`input`], [`web`]).

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod input;
#[cfg(feature = "python")]
mod python;
pub mod render;
pub mod web;

pub use algorithm::{
    dijkstra::RepeatedDijkstra,
    floyd_warshall::{compute_all_pairs_shortest_paths, FloydWarshall},
    AllPairsAlgorithm, AllPairsResult, DistanceMatrix, SuccessorMatrix,
};
/// Re-export main types for convenient use
pub use graph::weight_matrix::{WeightMatrix, NO_EDGE};

/// Reasons a weight matrix is rejected before any computation starts
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("matrix has no vertices")]
    Empty,

    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("weight at ({row}, {column}) is not a number")]
    NotANumber { row: usize, column: usize },

    #[error("weight at ({row}, {column}) is negative infinity")]
    NegativeInfinity { row: usize, column: usize },
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input matrix: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Cannot parse weight {token:?} at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Matrix has {vertices} vertices, limit is {limit}")]
    TooLarge { vertices: usize, limit: usize },

    #[error("Distance {from} -> {to} overflowed to negative infinity (negative cycle)")]
    DistanceOverflow { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
