//! Process wiring: bind, spawn the allocator, serve until a shutdown signal.

use tokio::sync::watch;

use memgrow_core::error::{MemgrowError, Result};

use crate::{app_state::AppState, config::ServiceConfig, router};

/// Run the service to completion.
///
/// Bind and transport errors are returned to the caller; the allocator
/// stopping on its own does not end the server.
pub async fn run(cfg: ServiceConfig) -> Result<()> {
    let listen = cfg.listen_addr();
    let port = cfg.server.port;

    let (state, allocator) = AppState::new(cfg);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| MemgrowError::Bind(format!("{listen}: {e}")))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let alloc_task = tokio::spawn(allocator.run(shutdown_rx));

    tracing::info!(%listen, port, "** service started **");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MemgrowError::Serve(e.to_string()));

    let _ = shutdown_tx.send(true);
    match alloc_task.await {
        Ok(state) => tracing::info!(allocator = state.as_str(), "allocator task finished"),
        Err(e) => tracing::warn!(error = %e, "allocator task did not finish cleanly"),
    }

    served?;
    tracing::info!("service stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM. A handler that cannot be installed is
/// logged and treated as never firing.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
