use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::ResetResponse;

/// `GET /reset-database`: truncate every table. Irreversible.
pub async fn reset_database(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResetResponse>, ApiError> {
    let tables = state.service.reset().await?;
    tracing::info!(truncated = tables.len(), "reset-database served");
    Ok(Json(ResetResponse { message: "Database reset successful." }))
}
