//! Smoke-test probe binary.
//!
//! Issues one GET against the service's health endpoint, prints the
//! response body, and exits 0 when the service looks healthy, 1
//! otherwise. A transport error (connection refused, DNS failure) also
//! exits 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::{DEFAULT_LOG_FILTER, DEFAULT_PORT};
use pulse::probe::{self, ProbeError, ProbeOutcome, ProbeTarget};

/// Smoke test for the pulse demo service
#[derive(Parser, Debug)]
#[command(name = "pulse-probe", version, about)]
struct Args {
    /// Host to probe
    #[arg(long, default_value = probe::DEFAULT_HOST)]
    host: String,

    /// Port to probe
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Path to request
    #[arg(long, default_value = probe::DEFAULT_PATH)]
    path: String,

    /// Log level filter (e.g., "pulse=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
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

    let target = ProbeTarget {
        host: args.host,
        port: args.port,
        path: args.path,
    };
    tracing::debug!(url = %target.url(), "Probing service");

    match probe::run(&target).await {
        Ok(report) => {
            println!("Response: {}", report.body);
            match report.outcome {
                ProbeOutcome::Passed => {
                    println!("Smoke test passed - app is healthy");
                    ExitCode::SUCCESS
                }
                ProbeOutcome::Failed => {
                    eprintln!("Smoke test failed");
                    ExitCode::FAILURE
                }
            }
        }
        Err(ProbeError::Transport(err)) => {
            eprintln!("Error connecting to server {err}");
            ExitCode::FAILURE
        }
    }
}
