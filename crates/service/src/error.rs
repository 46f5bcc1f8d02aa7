//! Typed error enum for the service layer.
//!
//! Unifies validation, model, upload, and storage failures into a single error
//! type so the HTTP boundary can map each failure mode to a status code.

use facevault_core::ValidationError;
use facevault_embeddings::EmbeddingError;
use facevault_storage::StorageError;
use facevault_upload::UploadError;
use thiserror::Error;

/// Service-layer error unifying every failure an operation can hit.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller sent a wrong image type or a malformed data URI.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Image decoding or embedding generation failed.
    #[error("Error generating embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// The external upload API rejected or failed the request.
    #[error("External API error: {0}")]
    Upload(#[from] UploadError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// No enrollment records exist for the person.
    #[error("Person ID not found: {0}")]
    PersonNotFound(String),

    /// A blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl ServiceError {
    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Embedding(e) => e.is_decode(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PersonNotFound(_) => true,
            Self::Storage(e) => e.is_not_found(),
            _ => false,
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
