//! Termination signal handling.

use anyhow::Result;
use tokio::signal;

/// Wait for a termination signal (Ctrl+C or SIGTERM).
///
/// # Errors
/// Returns an error if the Ctrl+C handler fails to install.
pub async fn wait_for_shutdown() -> Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        () = wait_sigterm() => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn wait_sigterm() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_sigterm() {
    std::future::pending::<()>().await;
}
