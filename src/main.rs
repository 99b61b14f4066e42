//! Utilization report HTTP server.
//!
//! # Environment Variables
//!
//! - `UTILIZATION_DATA_DIR`: YAML dataset directory (default: ./config/sample)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use utilization_engine::api::{AppState, create_router};
use utilization_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let data_dir =
        env::var("UTILIZATION_DATA_DIR").unwrap_or_else(|_| "./config/sample".to_string());
    let config = ConfigLoader::load(&data_dir)?;
    info!(data_dir = %data_dir, "HR dataset loaded");

    let app = create_router(AppState::new(config));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
