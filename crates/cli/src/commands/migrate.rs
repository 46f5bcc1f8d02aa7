//! Schema bootstrap command.
//!
//! Idempotent: creates the database, the `vector` extension and the
//! `embeddings` table only when missing.

use facevault_storage::traits::EmbeddingStore;

pub(crate) async fn run() -> anyhow::Result<()> {
    let storage = crate::connect_postgres().await?;
    let count = storage.count_embeddings().await?;
    println!("Schema ready ({count} embeddings stored)");
    Ok(())
}
