//! Storage layer for facevault
//!
//! Persists face embeddings and answers nearest-neighbor queries. The
//! PostgreSQL backend delegates the search to pgvector's cosine distance
//! operator; the in-memory backend does a linear scan with the same metric.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod backend;
pub mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_migrations::ensure_database;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
