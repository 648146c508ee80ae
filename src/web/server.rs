use axum::{
    http::{header, Method},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Environment variable overriding [`ServerConfig::max_vertices`]
pub const MAX_VERTICES_ENV: &str = "ROUTE_MATRIX_MAX_VERTICES";

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Largest matrix accepted; work grows with the cube of this
    pub max_vertices: usize,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            max_vertices: 512,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Applies overrides from the environment, ignoring unparseable values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(MAX_VERTICES_ENV) {
            match raw.parse() {
                Ok(limit) => self.max_vertices = limit,
                Err(_) => log::warn!("ignoring {}={:?}: not a number", MAX_VERTICES_ENV, raw),
            }
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Build the application router with middleware
pub fn build_app(config: ServerConfig) -> Router {
    let enable_cors = config.enable_cors;
    let app = Router::new()
        .merge(create_router())
        .with_state(AppState::new(config));

    if !enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr();
    let app = build_app(config);

    println!("🚀 Route Matrix server starting on http://{}", addr);
    println!("📊 POST a weight matrix to http://{}/api/shortest-paths", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3005");
        assert_eq!(config.max_vertices, 512);
        assert!(config.enable_cors);
    }
}
