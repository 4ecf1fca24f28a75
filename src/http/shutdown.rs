//! Graceful shutdown and signal handling.

use std::time::Duration;

use axum_server::Handle;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait up to `timeout` for existing connections to complete
/// 3. Shutdown
pub fn setup_shutdown_handler(handle: Handle, timeout: Duration) {
    tokio::spawn(async move {
        shutdown_signal().await;

        handle.graceful_shutdown(Some(timeout));
        tracing::info!(
            timeout_secs = timeout.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}

/// Resolves once Ctrl+C or SIGTERM arrives.
///
/// A signal that cannot be installed never resolves, so the other one still
/// drives shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
