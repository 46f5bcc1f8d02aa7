use thiserror::Error;

/// Rejected client input (image type, data URI, multipart fields).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid data URI format.")]
    InvalidDataUri,

    #[error("Invalid image type '{found}'. Allowed types are: {allowed}")]
    UnsupportedType { found: String, allowed: String },

    #[error("Invalid base64 encoding.")]
    InvalidBase64,

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// An embedding vector did not have the expected number of dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("embedding has {actual} dimensions, expected {expected}")]
pub struct DimensionError {
    pub expected: usize,
    pub actual: usize,
}
