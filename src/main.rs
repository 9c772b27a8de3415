//! Pulse: a demo HTTP service.
//!
//! This is the service entry point. It initializes tracing, resolves
//! configuration from the CLI and environment, sets up the axum router,
//! and serves HTTP until a shutdown signal arrives.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::{AppConfig, DEFAULT_LOG_FILTER};
use pulse::routes::create_router;

/// Pulse: a demo HTTP service with a health check
#[derive(Parser, Debug)]
#[command(name = "pulse", version, about)]
struct Args {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "pulse=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve configuration with priority: CLI > PORT env var > default
    let config = AppConfig::resolve(args.port);
    tracing::info!(port = config.port, "Loaded configuration");

    let app = create_router();

    // Start server; a bind failure is fatal and propagates out of main
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
