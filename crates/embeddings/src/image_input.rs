use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::EmbeddingError;

/// An uploaded image that is known to decode.
///
/// Keeps the original encoded bytes, which remote backends send on the wire,
/// next to the decoded pixels.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    bytes: Vec<u8>,
    format: Option<ImageFormat>,
    pixels: DynamicImage,
}

impl DecodedImage {
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Decode raw image bytes. CPU-bound; call from a blocking task.
pub fn decode_image(bytes: Vec<u8>) -> Result<DecodedImage, EmbeddingError> {
    let format = image::guess_format(&bytes).ok();
    let pixels = image::load_from_memory(&bytes).map_err(EmbeddingError::Decode)?;
    Ok(DecodedImage { bytes, format, pixels })
}
