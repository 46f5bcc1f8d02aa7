//! Response types (Serialize)

use facevault_core::{EmbeddingRecord, Match};
use serde::Serialize;

/// Envelope returned by the enrollment endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub code: u16,
    pub status: &'static str,
    pub message: &'static str,
}

impl SuccessResponse {
    #[must_use]
    pub const fn users_created() -> Self {
        Self { code: 200, status: "success", message: "Create users success" }
    }
}

#[derive(Debug, Serialize)]
pub struct IdentifyResponse {
    pub matches: Vec<Match>,
    pub face_detected: bool,
}

impl IdentifyResponse {
    #[must_use]
    pub fn from_matches(matches: Vec<Match>) -> Self {
        let face_detected = !matches.is_empty();
        Self { matches, face_detected }
    }
}

/// `year` and `gender` are reserved for an age/gender model and are always null.
#[derive(Debug, Serialize)]
pub struct RecognizeResponse {
    pub person_id: String,
    pub face_detected: bool,
    pub year: Option<u16>,
    pub gender: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PersonEmbeddingsResponse {
    pub person_id: String,
    pub records: Vec<EmbeddingRecord>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
