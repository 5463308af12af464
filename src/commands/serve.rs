//! HTTP server command

use crate::server::{self, ServerConfig};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Run the lookup server until Ctrl+C
///
/// # Errors
///
/// Returns an error if the runtime cannot start, the address cannot be bound,
/// or the server fails.
pub fn run_serve(config: &ServerConfig, dictionary: Dictionary) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(server::run(config, Arc::new(dictionary), shutdown_signal()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(err) => {
            tracing::error!(error = %err, "cannot listen for ctrl+c, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
