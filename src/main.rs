//! YorkU Course Planner backend entry point.
//!
//! Parses CLI arguments, loads configuration from TOML, initializes tracing,
//! sets up the Axum router and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use yorku_planner::config::DEFAULT_LOG_FILTER;
use yorku_planner::{create_router, start_server, AppConfig, LogFormat};

/// YorkU Course Planner backend server
#[derive(Parser, Debug)]
#[command(name = "yorku-planner", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "yorku_planner=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.host from the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Override http.port from the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration first: it selects the log format
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;

    // Validated by start_server, after the overrides
    config.apply_overrides(args.host, args.port);

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
