//! OS signal handling.
//!
//! # Design Decisions
//! - Ctrl+C is handled by the server itself; SIGTERM arrives through [`Shutdown`]
//! - Platforms without SIGTERM never resolve [`terminate`]
//!
//! [`Shutdown`]: crate::lifecycle::Shutdown

use tokio::sync::broadcast;

/// Resolves on Ctrl+C or when the shutdown broadcast fires (or its sender drops).
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received"),
        _ = shutdown.recv() => tracing::info!("Shutdown requested"),
    }
}

/// Resolves when the process receives SIGTERM.
pub async fn terminate() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("SIGTERM received");
                return;
            }
            Err(e) => tracing::warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    }

    std::future::pending::<()>().await;
}
