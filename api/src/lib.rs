//! HTTP surface for the law Q&A service.
//!
//! Boot order matters: the extracted document is segmented and indexed once
//! at startup, then every request is answered against that shared state.

use std::sync::Arc;

mod core;
mod routes;

pub mod error_handler;

use axum::{Router, routing::post};
use tokio::signal;
use tracing::info;

use crate::core::{app_state::AppState, config::ServiceConfig};
use crate::error_handler::AppError;
use crate::routes::query::query_route::query_document;

pub async fn start() -> Result<(), AppError> {
    let cfg = ServiceConfig::from_env()?;

    let state = Arc::new(AppState::initialize(&cfg).await?);

    let app = Router::new()
        .route("/query", post(query_document))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.api_address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %cfg.api_address, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
