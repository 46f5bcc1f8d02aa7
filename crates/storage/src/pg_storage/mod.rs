//! PostgreSQL storage backend using sqlx and pgvector.

mod admin;
mod embeddings;

use std::time::Duration;

use facevault_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, then make sure the pgvector extension and tables exist.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!(max_connections = PG_POOL_MAX_CONNECTIONS, "connected to PostgreSQL, schema ready");
        Ok(Self { pool })
    }
}
