//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use facevault_core::{Embedding, EmbeddingRecord, NearestMatch};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::traits::{AdminStore, EmbeddingStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── EmbeddingStore ───────────────────────────────────────────────

#[async_trait]
impl EmbeddingStore for StorageBackend {
    async fn save_embedding(
        &self,
        person_id: &str,
        embedding: &Embedding,
        image_url: Option<&str>,
    ) -> Result<i32, StorageError> {
        dispatch!(self, EmbeddingStore, save_embedding(person_id, embedding, image_url))
    }

    async fn find_nearest(
        &self,
        embedding: &Embedding,
        threshold: f64,
    ) -> Result<Option<NearestMatch>, StorageError> {
        dispatch!(self, EmbeddingStore, find_nearest(embedding, threshold))
    }

    async fn get_embeddings_by_person_id(
        &self,
        person_id: &str,
    ) -> Result<Vec<EmbeddingRecord>, StorageError> {
        dispatch!(self, EmbeddingStore, get_embeddings_by_person_id(person_id))
    }

    async fn count_embeddings(&self) -> Result<i64, StorageError> {
        dispatch!(self, EmbeddingStore, count_embeddings())
    }
}

// ── AdminStore ───────────────────────────────────────────────────

#[async_trait]
impl AdminStore for StorageBackend {
    async fn reset(&self) -> Result<Vec<String>, StorageError> {
        dispatch!(self, AdminStore, reset())
    }
}
