//! HTTP delivery layer.
//!
//! Sets up the routes and middleware, and runs the axum server until a
//! shutdown signal arrives.

pub mod context;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use context::{REQUEST_ID_HEADER, TRACE_ID_HEADER};
pub use error::{AppError, ErrorStatusPolicy};
pub use state::AppState;

use anyhow::Result;
use axum::{extract::DefaultBodyLimit, middleware, routing::any, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/contacts", any(handlers::contacts))
        .route("/groups", any(handlers::groups))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(context::assign_request_context))
        .with_state(state)
}

/// Serve `router` on `listener` until Ctrl-C or SIGTERM.
pub async fn run_server(listener: TcpListener, router: Router) -> Result<()> {
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryContactRepository, InMemoryGroupRepository};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let state = AppState::from_repositories(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(InMemoryGroupRepository::new()),
        );
        let _router = create_router(state, 1024);
    }
}
