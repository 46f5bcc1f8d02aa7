use async_trait::async_trait;

use crate::error::StorageError;

/// Destructive maintenance operations.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Remove every row from every table and restart identity sequences.
    ///
    /// Returns the names of the truncated tables. Irreversible.
    async fn reset(&self) -> Result<Vec<String>, StorageError>;
}
