use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use facevault_core::ValidationError;

use crate::AppState;
use crate::api_error::ApiError;
use crate::multipart::read_image_form;
use crate::request_types::CreateUserRequest;
use crate::response_types::SuccessResponse;

/// `POST /embed`: enroll the face in the uploaded `image` under `person_id`.
pub async fn embed(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<SuccessResponse>, ApiError> {
    let mut form = read_image_form(multipart).await?;
    let person_id = form.person_id()?;
    let image = form.image()?;
    state.service.enroll(&person_id, image).await?;
    Ok(Json(SuccessResponse::users_created()))
}

/// `POST /create-user`: enroll from a data URI and store the uploaded photo's path.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(req) = payload?;
    if req.person_id.trim().is_empty() {
        return Err(ValidationError::MissingField("person_id").into());
    }
    state.service.enroll_from_data_uri(&req.person_id, &req.image_base64).await?;
    Ok(Json(SuccessResponse::users_created()))
}
