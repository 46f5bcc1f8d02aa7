//! Storage error type.
//!
//! Callers branch on `is_not_found` rather than inspecting driver errors
//! themselves.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A query that must return a row returned none.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Connection, pool or SQL failure reported by the driver.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Creating the database, the `vector` extension or the schema failed.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// `RowNotFound` becomes `NotFound`; every other driver error is `Database`.
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: String::new() },
            _ => Self::Database(err),
        }
    }
}
