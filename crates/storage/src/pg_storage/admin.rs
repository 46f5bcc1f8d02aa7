//! AdminStore implementation for PgStorage.

use async_trait::async_trait;

use super::PgStorage;
use crate::error::StorageError;
use crate::pg_migrations::quote_ident;
use crate::traits::AdminStore;

#[async_trait]
impl AdminStore for PgStorage {
    async fn reset(&self) -> Result<Vec<String>, StorageError> {
        let mut tx = self.pool.begin().await?;

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT tablename::text FROM pg_tables WHERE schemaname = 'public'")
                .fetch_all(&mut *tx)
                .await?;

        for table in &tables {
            tracing::info!(table = %table, "truncating table");
            sqlx::query(&format!("TRUNCATE TABLE {} RESTART IDENTITY CASCADE", quote_ident(table)))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::info!(tables = tables.len(), "database reset complete, all data removed");
        Ok(tables)
    }
}
