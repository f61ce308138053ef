//! POST /query: answers a question against the indexed law document.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use counsel::QueryResult;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::query::query_request::QueryBody,
};

/// Handler: POST /query
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/query \
///   -H 'content-type: application/json' \
///   -d '{"query":"what happens if I steal from the Sept?"}'
/// ```
pub async fn query_document(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QueryBody>, JsonRejection>,
) -> AppResult<Json<QueryResult>> {
    let Json(body) = body.map_err(|rej| AppError::BadRequest(rej.body_text()))?;

    info!(query_len = body.query.len(), "handling /query");

    let result = state.qa.answer(&body.query).await?;

    Ok(Json(result))
}
