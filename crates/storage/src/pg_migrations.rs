//! PostgreSQL schema bootstrap for facevault storage.

use sqlx::{Connection, PgConnection, PgPool};

use crate::error::StorageError;

/// Create database `name` through the maintenance connection if it is missing.
///
/// `CREATE DATABASE` cannot take bind parameters, so the name is quoted as an
/// identifier.
pub async fn ensure_database(maintenance_url: &str, name: &str) -> Result<(), StorageError> {
    let mut conn = PgConnection::connect(maintenance_url).await?;

    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(name)
        .fetch_optional(&mut conn)
        .await?;

    if exists.is_some() {
        tracing::info!(database = name, "database already exists");
    } else {
        tracing::info!(database = name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(name))).execute(&mut conn).await?;
    }

    conn.close().await?;
    Ok(())
}

/// Run all PostgreSQL migrations. Idempotent.
pub(crate) async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("enable pgvector: {e}")))?;
    tracing::info!("pgvector extension enabled");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS embeddings (
            id SERIAL PRIMARY KEY,
            person_id TEXT,
            imageurl TEXT,
            embedding VECTOR(512) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create embeddings table: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_embeddings_person ON embeddings (person_id)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("create person index: {e}")))?;

    tracing::info!("PostgreSQL schema ready");
    Ok(())
}

/// Quote a PostgreSQL identifier, doubling embedded quotes.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
