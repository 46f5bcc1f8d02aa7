//! Typed error enum for the embeddings crate.

use facevault_core::DimensionError;
use thiserror::Error;

/// Errors from image decoding and embedding generation.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Bytes are not an image the decoder understands.
    #[error("Could not decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("no face detected in image")]
    NoFaceDetected,
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error("embedding service request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("embedding service returned HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("embedding client initialization failed: {0}")]
    ClientInit(String),
}

impl EmbeddingError {
    /// Whether the failure is the caller's fault (undecodable image bytes).
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
