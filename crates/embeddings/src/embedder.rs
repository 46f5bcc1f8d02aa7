use async_trait::async_trait;
use facevault_core::{Embedding, Face};

use crate::error::EmbeddingError;
use crate::image_input::DecodedImage;

/// A face recognition model, seen from the outside.
///
/// Backends are swappable: the service only ever holds an
/// `Arc<dyn FaceEmbedder>`.
#[async_trait]
pub trait FaceEmbedder: Send + Sync {
    /// Embedding of the primary face. Fails with `NoFaceDetected` when the
    /// image contains no face.
    async fn embed(&self, image: &DecodedImage) -> Result<Embedding, EmbeddingError>;

    /// Every face found in the image, possibly none.
    async fn identify(&self, image: &DecodedImage) -> Result<Vec<Face>, EmbeddingError>;

    /// The most prominent face (largest bounding box), if any.
    async fn identify_single_face(
        &self,
        image: &DecodedImage,
    ) -> Result<Option<Face>, EmbeddingError> {
        let faces = self.identify(image).await?;
        Ok(faces.into_iter().max_by(|a, b| a.bbox.area().total_cmp(&b.bbox.area())))
    }
}
