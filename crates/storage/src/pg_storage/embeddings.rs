//! EmbeddingStore implementation for PgStorage.

use async_trait::async_trait;
use facevault_core::{Embedding, EmbeddingRecord, NearestMatch};
use sqlx::Row;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::EmbeddingStore;

#[async_trait]
impl EmbeddingStore for PgStorage {
    async fn save_embedding(
        &self,
        person_id: &str,
        embedding: &Embedding,
        image_url: Option<&str>,
    ) -> Result<i32, StorageError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO embeddings (person_id, embedding, imageurl)
             VALUES ($1, $2::vector, $3)
             RETURNING id",
        )
        .bind(person_id)
        .bind(embedding.to_pgvector())
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id, person_id, "embedding stored");
        Ok(id)
    }

    async fn find_nearest(
        &self,
        embedding: &Embedding,
        threshold: f64,
    ) -> Result<Option<NearestMatch>, StorageError> {
        let row = sqlx::query(
            "SELECT person_id, embedding <=> $1::vector AS distance
               FROM embeddings
              WHERE embedding <=> $1::vector < $2
              ORDER BY distance
              LIMIT 1",
        )
        .bind(embedding.to_pgvector())
        .bind(threshold)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let person_id: Option<String> = r.try_get("person_id")?;
                let distance: f64 = r.try_get("distance")?;
                Ok(Some(NearestMatch { person_id: person_id_or_empty(person_id), distance }))
            },
            None => Ok(None),
        }
    }

    async fn get_embeddings_by_person_id(
        &self,
        person_id: &str,
    ) -> Result<Vec<EmbeddingRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, person_id, imageurl
               FROM embeddings
              WHERE person_id = $1
              ORDER BY id",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| -> Result<EmbeddingRecord, StorageError> {
                Ok(EmbeddingRecord {
                    id: r.try_get("id")?,
                    person_id: person_id_or_empty(r.try_get("person_id")?),
                    image_url: r.try_get("imageurl")?,
                })
            })
            .collect()
    }

    async fn count_embeddings(&self) -> Result<i64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM embeddings").fetch_one(&self.pool).await?;
        Ok(count)
    }
}

/// `person_id` is a nullable column; rows written by this service always set it.
fn person_id_or_empty(value: Option<String>) -> String {
    value.unwrap_or_else(|| {
        tracing::warn!("embedding row without person_id");
        String::new()
    })
}
