//! Typed error enum for the upload crate.

use thiserror::Error;

/// Errors from the external upload API.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("upload API returned HTTP {code}, expected 201: {body}")]
    UnexpectedStatus { code: u16, body: String },
    #[error("upload API response is not valid JSON: {0}")]
    JsonParse(#[source] serde_json::Error),
    #[error("upload API did not return a file path")]
    MissingPath,
    #[error("upload API URL is not configured (set UPLOAD_API_URL)")]
    NotConfigured,
    #[error("upload client initialization failed: {0}")]
    ClientInit(String),
}
