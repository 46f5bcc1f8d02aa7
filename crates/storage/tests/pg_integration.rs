//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p facevault-storage -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]
#![allow(clippy::indexing_slicing, reason = "test vectors have fixed dimension")]

use facevault_core::{EMBEDDING_DIMENSION, Embedding};
use facevault_storage::PgStorage;
use facevault_storage::traits::EmbeddingStore;
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_person() -> String {
    format!("test-{}", Uuid::new_v4())
}

/// Random-ish unit vector seeded by a uuid, so parallel tests do not collide.
fn distinct_embedding() -> Embedding {
    let seed = Uuid::new_v4();
    let bytes = seed.as_bytes();
    let mut v: Vec<f32> = (0..EMBEDDING_DIMENSION)
        .map(|i| f32::from(bytes[i % 16]) + (i as f32) * 0.001 - 128.0)
        .collect();
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    v.iter_mut().for_each(|x| *x /= norm);
    Embedding::try_from(v).unwrap()
}

/// Unit vector at cosine distance `d` from `base` (rotated toward axis 0).
fn rotated(base: &Embedding, d: f64) -> Embedding {
    let b: Vec<f64> = base.as_slice().iter().map(|x| f64::from(*x)).collect();
    // orthonormal companion: e0 minus its projection on b
    let mut o: Vec<f64> = vec![0.0; EMBEDDING_DIMENSION];
    o[0] = 1.0;
    let proj = b[0];
    o.iter_mut().zip(&b).for_each(|(oi, bi)| *oi -= proj * bi);
    let norm = o.iter().map(|x| x * x).sum::<f64>().sqrt();
    o.iter_mut().for_each(|x| *x /= norm);

    let cos = 1.0 - d;
    let sin = (1.0 - cos * cos).sqrt();
    let v: Vec<f32> = b.iter().zip(&o).map(|(bi, oi)| (cos * bi + sin * oi) as f32).collect();
    Embedding::try_from(v).unwrap()
}

#[tokio::test]
#[ignore]
async fn test_pg_save_and_find_self() {
    let storage = create_pg_storage().await;
    let person = unique_person();
    let emb = distinct_embedding();

    let id = storage.save_embedding(&person, &emb, None).await.unwrap();
    assert!(id > 0);

    let nearest = storage.find_nearest(&emb, 0.45).await.unwrap().unwrap();
    assert_eq!(nearest.person_id, person);
    assert!(nearest.distance.abs() < 1e-4);
}

#[tokio::test]
#[ignore]
async fn test_pg_match_at_distance_point_two() {
    let storage = create_pg_storage().await;
    let person = unique_person();
    let emb = distinct_embedding();
    storage.save_embedding(&person, &emb, None).await.unwrap();

    let query = rotated(&emb, 0.2);
    let nearest = storage.find_nearest(&query, 0.45).await.unwrap().unwrap();
    // another test's vector could be closer only if nearly identical; uuids make that unlikely
    assert_eq!(nearest.person_id, person);
    assert!((1.0 - nearest.distance - 0.8).abs() < 1e-3);
}

#[tokio::test]
#[ignore]
async fn test_pg_records_by_person() {
    let storage = create_pg_storage().await;
    let person = unique_person();

    storage
        .save_embedding(&person, &distinct_embedding(), Some("faces/first.png"))
        .await
        .unwrap();
    storage.save_embedding(&person, &distinct_embedding(), None).await.unwrap();

    let records = storage.get_embeddings_by_person_id(&person).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].id < records[1].id);
    assert_eq!(records[0].image_url.as_deref(), Some("faces/first.png"));

    let missing = storage.get_embeddings_by_person_id(&unique_person()).await.unwrap();
    assert!(missing.is_empty());
}
