//! Enrollment: compute an embedding and persist it under a person id.

use facevault_core::validate_base64_image;
use facevault_storage::traits::EmbeddingStore;

use super::RecognitionService;
use crate::ServiceError;

impl RecognitionService {
    /// Enroll from raw image bytes. Returns the new record id.
    pub async fn enroll(&self, person_id: &str, image_bytes: Vec<u8>) -> Result<i32, ServiceError> {
        let image = self.decode(image_bytes).await?;
        let embedding = self.embedder.embed(&image).await?;
        let id = self.storage.save_embedding(person_id, &embedding, None).await?;
        tracing::info!(id, person_id, "face enrolled");
        Ok(id)
    }

    /// Enroll from a base64 data URI and keep a copy of the photo.
    ///
    /// Order: validate, embed, upload, then persist with the uploaded path.
    /// Nothing is written when any earlier step fails.
    pub async fn enroll_from_data_uri(
        &self,
        person_id: &str,
        data_uri: &str,
    ) -> Result<i32, ServiceError> {
        let bytes = validate_base64_image(data_uri)?;
        let image = self.decode(bytes).await?;
        let embedding = self.embedder.embed(&image).await?;
        let path = self.uploader.upload_face(data_uri, person_id).await?;
        let id = self.storage.save_embedding(person_id, &embedding, Some(&path)).await?;
        tracing::info!(id, person_id, image_url = %path, "face enrolled with uploaded image");
        Ok(id)
    }

    /// Identify from a base64 data URI.
    pub async fn identify_data_uri(
        &self,
        data_uri: &str,
    ) -> Result<Vec<facevault_core::Match>, ServiceError> {
        let bytes = validate_base64_image(data_uri)?;
        self.identify(bytes).await
    }
}
