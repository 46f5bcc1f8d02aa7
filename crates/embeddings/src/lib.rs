//! Face embedding capability for facevault
//!
//! The recognition model itself runs elsewhere. This crate decodes uploaded
//! images and defines [`FaceEmbedder`], the seam every model backend plugs
//! into; [`RemoteEmbedder`] talks to a model server over HTTP.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod embedder;
pub mod error;
mod image_input;
mod remote;

pub use embedder::FaceEmbedder;
pub use error::EmbeddingError;
pub use image_input::{DecodedImage, decode_image};
pub use remote::RemoteEmbedder;
