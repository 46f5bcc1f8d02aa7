//! Core types and helpers for facevault
//!
//! Domain types shared across all other crates: embeddings, detected faces,
//! match results, stored records, configuration, and input validation.

mod config;
mod constants;
mod env_config;
mod error;
mod face;
mod validation;

pub use config::{DatabaseConfig, MatchConfig};
pub use constants::*;
pub use env_config::{env_parse_with_default, env_string};
pub use error::{DimensionError, ValidationError};
pub use face::{BoundingBox, Embedding, EmbeddingRecord, Face, Match, NearestMatch};
pub use validation::{
    ALLOWED_IMAGE_TYPES, is_allowed_image_type, validate_base64_image, validate_image_file,
};
