mod enrollment;
mod matching;

use std::sync::Arc;

use facevault_core::{EmbeddingRecord, MatchConfig};
use facevault_embeddings::{DecodedImage, FaceEmbedder, decode_image};
use facevault_storage::StorageBackend;
use facevault_storage::traits::{AdminStore, EmbeddingStore};
use facevault_upload::UploadClient;

use crate::ServiceError;

/// Largest meaningful cosine distance; `<=>` ranges over `[0, 2]`.
const MAX_COSINE_DISTANCE: f64 = 2.0;

/// Enrollment and identification over a storage backend and a face model.
///
/// Every collaborator is passed in explicitly, so tests can swap any of them.
pub struct RecognitionService {
    pub(crate) storage: Arc<StorageBackend>,
    pub(crate) embedder: Arc<dyn FaceEmbedder>,
    pub(crate) uploader: Arc<UploadClient>,
    pub(crate) config: MatchConfig,
}

impl RecognitionService {
    #[must_use]
    pub fn new(
        storage: Arc<StorageBackend>,
        embedder: Arc<dyn FaceEmbedder>,
        uploader: Arc<UploadClient>,
        config: MatchConfig,
    ) -> Self {
        let threshold = config.threshold.clamp(0.0, MAX_COSINE_DISTANCE);
        if (threshold - config.threshold).abs() > f64::EPSILON {
            tracing::warn!(
                original = config.threshold,
                clamped = threshold,
                "MATCH_THRESHOLD clamped to [0.0, 2.0]"
            );
        }
        Self { storage, embedder, uploader, config: MatchConfig { threshold, ..config } }
    }

    #[must_use]
    pub const fn config(&self) -> MatchConfig {
        self.config
    }

    #[must_use]
    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    /// Decode image bytes on the blocking pool.
    pub async fn decode(&self, bytes: Vec<u8>) -> Result<DecodedImage, ServiceError> {
        let image = tokio::task::spawn_blocking(move || decode_image(bytes)).await??;
        let (width, height) = image.dimensions();
        tracing::debug!(width, height, format = ?image.format(), "image decoded");
        Ok(image)
    }

    /// All records for `person_id`; an unknown person is an error, not an empty list.
    pub async fn get_embeddings_by_person_id(
        &self,
        person_id: &str,
    ) -> Result<Vec<EmbeddingRecord>, ServiceError> {
        let records = self.storage.get_embeddings_by_person_id(person_id).await?;
        if records.is_empty() {
            return Err(ServiceError::PersonNotFound(person_id.to_owned()));
        }
        Ok(records)
    }

    pub async fn count_embeddings(&self) -> Result<i64, ServiceError> {
        Ok(self.storage.count_embeddings().await?)
    }

    /// Truncate every table. Irreversible, no confirmation.
    pub async fn reset(&self) -> Result<Vec<String>, ServiceError> {
        let tables = self.storage.reset().await?;
        tracing::warn!(tables = ?tables, "database reset, all enrollments removed");
        Ok(tables)
    }
}
