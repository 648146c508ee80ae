pub mod traits;
pub mod floyd_warshall;
pub mod dijkstra;

pub use traits::{AllPairsAlgorithm, AllPairsResult, DistanceMatrix, SuccessorMatrix};
