//! In-process storage backend.
//!
//! Linear scan with the same cosine distance as pgvector's `<=>`. Used for
//! tests and for running the service without a database (`serve --memory`).

use std::sync::Arc;

use async_trait::async_trait;
use facevault_core::{Embedding, EmbeddingRecord, NearestMatch};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{AdminStore, EmbeddingStore};

#[derive(Debug)]
struct StoredEmbedding {
    id: i32,
    person_id: String,
    embedding: Embedding,
    image_url: Option<String>,
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<StoredEmbedding>,
    next_id: i32,
}

/// Cloning shares the underlying table.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    table: Arc<RwLock<Table>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmbeddingStore for MemoryStorage {
    async fn save_embedding(
        &self,
        person_id: &str,
        embedding: &Embedding,
        image_url: Option<&str>,
    ) -> Result<i32, StorageError> {
        let mut table = self.table.write().await;
        table.next_id = table.next_id.saturating_add(1);
        let id = table.next_id;
        table.rows.push(StoredEmbedding {
            id,
            person_id: person_id.to_owned(),
            embedding: embedding.clone(),
            image_url: image_url.map(ToOwned::to_owned),
        });
        Ok(id)
    }

    async fn find_nearest(
        &self,
        embedding: &Embedding,
        threshold: f64,
    ) -> Result<Option<NearestMatch>, StorageError> {
        let table = self.table.read().await;
        let nearest = table
            .rows
            .iter()
            .map(|row| (row, row.embedding.cosine_distance(embedding)))
            .filter(|(_, distance)| *distance < threshold)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(row, distance)| NearestMatch { person_id: row.person_id.clone(), distance });
        Ok(nearest)
    }

    async fn get_embeddings_by_person_id(
        &self,
        person_id: &str,
    ) -> Result<Vec<EmbeddingRecord>, StorageError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|row| row.person_id == person_id)
            .map(|row| EmbeddingRecord {
                id: row.id,
                person_id: row.person_id.clone(),
                image_url: row.image_url.clone(),
            })
            .collect())
    }

    async fn count_embeddings(&self) -> Result<i64, StorageError> {
        let table = self.table.read().await;
        Ok(i64::try_from(table.rows.len()).unwrap_or(i64::MAX))
    }
}

#[async_trait]
impl AdminStore for MemoryStorage {
    async fn reset(&self) -> Result<Vec<String>, StorageError> {
        let mut table = self.table.write().await;
        *table = Table::default();
        tracing::info!("In-memory store reset");
        Ok(vec!["embeddings".to_owned()])
    }
}
