//! Destructive reset test for PgStorage, kept in its own binary so it never
//! races the other integration tests.
//! Run with: DATABASE_URL=... cargo test -p facevault-storage --test pg_reset -- --ignored
//! Truncates every table; point DATABASE_URL at a scratch database.

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use facevault_core::{EMBEDDING_DIMENSION, Embedding};
use facevault_storage::PgStorage;
use facevault_storage::traits::{AdminStore, EmbeddingStore};

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn ones() -> Embedding {
    Embedding::try_from(vec![1.0_f32; EMBEDDING_DIMENSION]).unwrap()
}

#[tokio::test]
#[ignore]
async fn test_pg_reset_truncates_everything() {
    let storage = create_pg_storage().await;
    let person = "reset-test".to_owned();
    storage.save_embedding(&person, &ones(), None).await.unwrap();

    let tables = storage.reset().await.unwrap();
    assert!(tables.iter().any(|t| t == "embeddings"));
    assert_eq!(storage.count_embeddings().await.unwrap(), 0);
    assert!(storage.get_embeddings_by_person_id(&person).await.unwrap().is_empty());

    let id = storage.save_embedding(&person, &ones(), None).await.unwrap();
    assert_eq!(id, 1, "identity sequence should restart");
}
