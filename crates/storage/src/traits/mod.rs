//! Storage trait abstraction
//!
//! Async domain traits implemented by every backend, so the service layer
//! never depends on a concrete database.

pub mod admin;
pub mod embedding;

pub use admin::AdminStore;
pub use embedding::EmbeddingStore;
