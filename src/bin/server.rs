//! Presence analyzer HTTP server binary.
//!
//! Loads the configuration, builds the HTTP router, and starts serving
//! requests. The dataset CSV is re-read on every API request, so replacing
//! the file on disk takes effect immediately.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin presence-server
//!
//! # Point at a different dataset
//! DATA_CSV=/var/lib/presence/export.csv cargo run --bin presence-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_CSV`: Path to the presence CSV export
//! - `STATIC_DIR`: Directory with the static chart pages
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use presence_analyzer::config::AppConfig;
use presence_analyzer::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting presence analyzer server");

    let config = AppConfig::load()?;
    info!("Dataset: {}", config.data.csv_path.display());

    // Determine bind address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state and router
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
