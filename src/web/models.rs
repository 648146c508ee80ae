use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for an all-pairs computation.
///
/// `null` cells, and cells equal to `no_edge_marker` when one is given, mean
/// there is no direct edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub weights: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub no_edge_marker: Option<f64>,
    #[serde(default)]
    pub queries: Vec<PathQuery>,
}

/// A 0-based `from → to` pair whose path should be reconstructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub from: usize,
    pub to: usize,
}

/// Reconstructed path for one query.
///
/// `path` and `distance` are absent when the pair is unreachable or the walk
/// runs into a negative cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathAnswer {
    pub from: usize,
    pub to: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// A direct edge of the input graph, for drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Response containing the computed matrices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub computation_id: Uuid,
    pub algorithm: String,
    pub vertex_count: usize,
    pub execution_time_ms: f64,
    /// `null` marks unreachable pairs
    pub distances: Vec<Vec<Option<f64>>>,
    pub successors: Vec<Vec<usize>>,
    pub paths: Vec<PathAnswer>,
    pub edges: Vec<WebEdge>,
}

/// Error response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
