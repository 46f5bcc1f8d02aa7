use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use facevault_core::UNKNOWN_PERSON_ID;

use crate::AppState;
use crate::api_error::ApiError;
use crate::multipart::read_image_form;
use crate::request_types::RecognizeRequest;
use crate::response_types::{IdentifyResponse, RecognizeResponse};

/// `POST /identify`: one match per detected face, up to the configured cap.
pub async fn identify(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<IdentifyResponse>, ApiError> {
    let image = read_image_form(multipart).await?.image()?;
    let matches = state.service.identify(image).await?;
    Ok(Json(IdentifyResponse::from_matches(matches)))
}

/// `POST /identify-face`: match only the largest face in the image.
pub async fn identify_face(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<IdentifyResponse>, ApiError> {
    let image = read_image_form(multipart).await?.image()?;
    let best = state.service.identify_single(image).await?;
    Ok(Json(IdentifyResponse::from_matches(best.into_iter().collect())))
}

/// `POST /recognize`: person id of the first match in a data URI image, in
/// the model's face order.
pub async fn recognize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecognizeRequest>, JsonRejection>,
) -> Result<Json<RecognizeResponse>, ApiError> {
    let Json(req) = payload?;
    let matches = state.service.identify_data_uri(&req.image_base64).await?;
    let face_detected = !matches.is_empty();
    let person_id = matches
        .into_iter()
        .next()
        .map_or_else(|| UNKNOWN_PERSON_ID.to_owned(), |m| m.person_id);
    Ok(Json(RecognizeResponse { person_id, face_detected, year: None, gender: None }))
}
