use route_matrix::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("invalid port {:?}, using {}", raw, defaults.port);
            defaults.port
        }),
        None => defaults.port,
    };

    let config = ServerConfig { port, ..defaults }.with_env_overrides();

    println!("🔧 Starting Route Matrix Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}", config.socket_addr());
    println!("   🔢 Max vertices: {}", config.max_vertices);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!();

    start_server(config).await?;

    Ok(())
}
