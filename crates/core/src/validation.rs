//! Image input validation.
//!
//! Checks only the declared MIME type and, for data URIs, the URI shape and
//! base64 encoding. Whether the bytes are a decodable image is checked later,
//! when the image is decoded.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::error::ValidationError;

/// MIME types accepted for uploads and data URIs.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

static DATA_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used, reason = "static pattern is covered by tests")]
    Regex::new(r"^data:(image/[a-zA-Z0-9.+-]+);base64,(.+)$").unwrap()
});

#[must_use]
pub fn is_allowed_image_type(mime: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&mime)
}

fn unsupported(found: &str) -> ValidationError {
    ValidationError::UnsupportedType {
        found: found.to_owned(),
        allowed: ALLOWED_IMAGE_TYPES.join(", "),
    }
}

/// Reject uploaded files whose declared content type is not an allowed image type.
pub fn validate_image_file(content_type: Option<&str>) -> Result<(), ValidationError> {
    match content_type {
        Some(ct) if is_allowed_image_type(ct) => Ok(()),
        other => Err(unsupported(other.unwrap_or(""))),
    }
}

/// Validate a `data:<mime>;base64,<payload>` string and return the decoded payload.
pub fn validate_base64_image(data_uri: &str) -> Result<Vec<u8>, ValidationError> {
    let caps = DATA_URI_RE.captures(data_uri).ok_or(ValidationError::InvalidDataUri)?;
    let mime = caps.get(1).map_or("", |m| m.as_str());
    let payload = caps.get(2).map_or("", |m| m.as_str());

    if !is_allowed_image_type(mime) {
        return Err(unsupported(mime));
    }

    STANDARD.decode(payload).map_err(|_| ValidationError::InvalidBase64)
}
