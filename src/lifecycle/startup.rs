//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the initial record store (seeded or empty)
//! - Bind the TCP listener
//! - Install the optional metrics exporter

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ApiConfig, ListenerConfig, ObservabilityConfig};
use crate::observability::metrics;
use crate::store::{demo_users, UserStore};

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Create the store the service starts with.
pub fn initial_store(api: &ApiConfig) -> Arc<UserStore> {
    let seed = if api.seed_demo_data {
        demo_users()
    } else {
        Vec::new()
    };
    tracing::info!(records = seed.len(), "Record store initialized");
    Arc::new(UserStore::new(seed))
}

/// Bind the configured listener address.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.bind_address.clone(),
            source,
        })
}

/// Start the Prometheus exporter when enabled.
pub fn start_metrics(config: &ObservabilityConfig) -> Result<(), StartupError> {
    if !config.metrics_enabled {
        return Ok(());
    }

    let addr: SocketAddr = config
        .metrics_address
        .parse()
        .map_err(|_| StartupError::MetricsAddress(config.metrics_address.clone()))?;
    metrics::init_metrics(addr)?;
    Ok(())
}
