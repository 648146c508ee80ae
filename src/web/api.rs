use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{AllPairsAlgorithm, AllPairsResult};
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::graph::WeightMatrix;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/shortest-paths", post(compute_shortest_paths))
        .route("/api/health", get(health_check))
}

/// Run Floyd–Warshall on the submitted matrix
pub async fn compute_shortest_paths(
    State(state): State<AppState>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let limit = state.config.max_vertices;
    if request.weights.len() > limit {
        return Err(error_response(&Error::TooLarge {
            vertices: request.weights.len(),
            limit,
        }));
    }

    let weights = convert_request_weights(&request).map_err(|err| error_response(&err))?;
    let n = weights.size();
    if let Some(query) = request.queries.iter().find(|q| q.from >= n || q.to >= n) {
        return Err(error_response(&Error::InvalidVertex(query.from.max(query.to))));
    }

    let queries = request.queries.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        let result = FloydWarshall::new().compute(&weights);
        (weights, result, start_time.elapsed())
    })
    .await;

    let (weights, result, execution_time) = match joined {
        Ok(output) => output,
        Err(err) => {
            log::error!("shortest path task failed: {}", err);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse {
                error: "computation_failed".to_string(),
                message: format!("Computation task failed: {}", err),
                details: None,
            })));
        }
    };
    let result = result.map_err(|err| error_response(&err))?;
    let distances = result
        .distances
        .to_option_rows()
        .map_err(|err| error_response(&err))?;

    log::info!(
        "computed {}x{} matrix in {:.3} ms",
        n,
        n,
        execution_time.as_secs_f64() * 1000.0
    );

    Ok(Json(ShortestPathResponse {
        computation_id: Uuid::new_v4(),
        algorithm: <FloydWarshall as AllPairsAlgorithm<f64>>::name(&FloydWarshall::new()).to_string(),
        vertex_count: n,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances,
        successors: result.successors.to_rows(),
        paths: answer_queries(&result, &queries),
        edges: weights
            .edges()
            .map(|(source, target, weight)| WebEdge { source, target, weight })
            .collect(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn convert_request_weights(request: &ShortestPathRequest) -> crate::Result<WeightMatrix<f64>> {
    let rows: Vec<Vec<f64>> = request
        .weights
        .iter()
        .map(|row| row.iter().map(|cell| cell.unwrap_or(f64::INFINITY)).collect())
        .collect();

    match request.no_edge_marker {
        Some(marker) => WeightMatrix::from_rows_with_marker(rows, marker),
        None => WeightMatrix::from_rows(rows),
    }
}

fn answer_queries(result: &AllPairsResult<f64>, queries: &[PathQuery]) -> Vec<PathAnswer> {
    queries
        .iter()
        .map(|query| {
            let path = result.path(query.from, query.to);
            let distance = path.as_ref().map(|_| result.distances.get(query.from, query.to));
            PathAnswer {
                from: query.from,
                to: query.to,
                path,
                distance,
            }
        })
        .collect()
}

fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::Parse { .. } => (StatusCode::BAD_REQUEST, "parse_error"),
        Error::TooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "matrix_too_large"),
        Error::DistanceOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "distance_overflow"),
        Error::NegativeWeight(_) | Error::Io(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "computation_failed")
        }
    };

    log::debug!("rejecting request: {}", err);

    (status, Json(ErrorResponse {
        error: code.to_string(),
        message: err.to_string(),
        details: None,
    }))
}
