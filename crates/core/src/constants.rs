//! Shared constants for facevault.

/// Face embedding vector dimension (ArcFace-style recognition models emit 512d).
pub const EMBEDDING_DIMENSION: usize = 512;

/// Default cosine distance threshold. A stored embedding matches only when its
/// distance to the query is strictly below this value.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.45;

/// Default number of faces processed per identification request.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Person id reported when no stored embedding is close enough.
pub const UNKNOWN_PERSON_ID: &str = "unknown";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default request body limit for image uploads (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default timeout for calls to the external file-upload API.
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Default timeout for calls to the remote embedding service.
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 60;

/// Default base URL of the remote embedding service.
pub const DEFAULT_EMBEDDING_SERVICE_URL: &str = "http://127.0.0.1:8500";

/// Directory tag sent to the upload API for enrollment photos.
pub const UPLOAD_DIRECTORY: &str = "FACE";
