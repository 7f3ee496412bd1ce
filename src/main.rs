//! User directory service (v1)
//!
//! An in-memory user directory served over HTTP with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout, body limit)
//!                         │
//!                         ▼
//!                     api::handlers ──────▶ filter::build_rule (partial search)
//!                         │                        │
//!                         ▼                        ▼
//!                     store::UserStore ◀──── MatchRule::matches
//!                         │
//!     Client Response     ▼
//!     ◀────────────── JSON body
//!
//!     Cross-cutting: config (TOML) · observability (tracing, metrics) · lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;
use user_directory::config::{load_config, validate_config, ConfigError, ServiceConfig};
use user_directory::lifecycle::{signals, startup, Shutdown};
use user_directory::observability::logging::init_logging;
use user_directory::HttpServer;

#[derive(Parser)]
#[command(name = "user-directory")]
#[command(about = "In-memory user directory HTTP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8081).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability.log_level)?;

    tracing::info!("user-directory v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        strict_mode = config.api.strict_mode,
        seed_demo_data = config.api.seed_demo_data,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    startup::start_metrics(&config.observability)?;

    let listener = match startup::bind_listener(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on(signals::terminate());

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
