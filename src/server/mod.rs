//! HTTP surface for the wallet ledger.

mod error;
pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::WalletLedger;

pub use error::ApiError;

pub type SharedLedger = Arc<WalletLedger>;

/// Build the router with every wallet route mounted.
pub fn router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/wallet", post(handlers::create_wallet))
        .route(
            "/wallet/:id",
            get(handlers::get_wallet).delete(handlers::delete_wallet),
        )
        .route("/wallets", get(handlers::list_wallets))
        .route("/wallet/add/:id", put(handlers::add_points))
        .route("/wallet/withdraw/:id", put(handlers::withdraw_points))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

/// Serve the ledger on `addr` until Ctrl+C or SIGTERM.
pub async fn serve(ledger: WalletLedger, addr: &str) -> Result<()> {
    let ledger = Arc::new(ledger);
    let app = router(ledger.clone());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down gracefully...");
    ledger.store().close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
}
