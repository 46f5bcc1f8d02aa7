use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::PersonEmbeddingsResponse;

/// `GET /embeddings/{person_id}`: enrollment records without vectors; 404 when none.
pub async fn get_person_embeddings(
    State(state): State<Arc<AppState>>,
    Path(person_id): Path<String>,
) -> Result<Json<PersonEmbeddingsResponse>, ApiError> {
    let records = state.service.get_embeddings_by_person_id(&person_id).await?;
    Ok(Json(PersonEmbeddingsResponse { person_id, records }))
}
