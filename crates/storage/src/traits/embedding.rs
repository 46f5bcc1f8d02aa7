use async_trait::async_trait;
use facevault_core::{Embedding, EmbeddingRecord, NearestMatch};

use crate::error::StorageError;

/// Embedding storage operations.
#[async_trait]
pub trait EmbeddingStore: Send + Sync {
    /// Insert one enrollment record and return its generated id.
    ///
    /// `person_id` is not unique: a person may be enrolled from several photos.
    async fn save_embedding(
        &self,
        person_id: &str,
        embedding: &Embedding,
        image_url: Option<&str>,
    ) -> Result<i32, StorageError>;

    /// Closest stored embedding by cosine distance, if its distance is
    /// strictly below `threshold`.
    async fn find_nearest(
        &self,
        embedding: &Embedding,
        threshold: f64,
    ) -> Result<Option<NearestMatch>, StorageError>;

    /// All records enrolled for `person_id`, ordered by id. The raw vector is
    /// not returned.
    async fn get_embeddings_by_person_id(
        &self,
        person_id: &str,
    ) -> Result<Vec<EmbeddingRecord>, StorageError>;

    /// Total number of stored embeddings.
    async fn count_embeddings(&self) -> Result<i64, StorageError>;
}
