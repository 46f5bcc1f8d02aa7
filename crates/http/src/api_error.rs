//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status code.
//! Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use facevault_core::ValidationError;
use facevault_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` is logged server-side and its message is still returned to the
/// client, so callers can tell model, upload and database failures apart.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: no records for the requested person.
    NotFound(String),
    /// 413 Payload Too Large: body exceeded the configured upload limit.
    PayloadTooLarge(String),
    /// 500 Internal Server Error: model, upload or storage failure.
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::PayloadTooLarge(msg) => {
                tracing::warn!(%status, error = %msg, "request rejected");
                msg
            },
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                msg
            },
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use facevault_embeddings::EmbeddingError;
    use facevault_storage::StorageError;
    use facevault_upload::UploadError;

    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let err = ApiError::from(ServiceError::from(ValidationError::InvalidBase64));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(ServiceError::PersonNotFound("ghost".to_owned()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(ServiceError::from(EmbeddingError::NoFaceDetected));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(ServiceError::from(UploadError::NotConfigured));
        assert!(matches!(err, ApiError::Internal(ref m) if m.starts_with("External API error")));

        let err = ApiError::from(ServiceError::from(StorageError::Migration("boom".to_owned())));
        assert!(matches!(err, ApiError::Internal(ref m) if m.contains("boom")));
    }
}
