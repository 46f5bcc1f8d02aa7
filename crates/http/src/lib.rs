//! HTTP API server for facevault.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod multipart;
mod request_types;
mod response_types;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use facevault_core::DEFAULT_MAX_UPLOAD_BYTES;
use facevault_service::RecognitionService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use request_types::{CreateUserRequest, RecognizeRequest};
pub use response_types::{
    IdentifyResponse, PersonEmbeddingsResponse, RecognizeResponse, ResetResponse,
    SuccessResponse, VersionResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub service: Arc<RecognitionService>,
    /// Request body cap, applied to multipart and JSON bodies alike.
    pub max_upload_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<RecognitionService>) -> Self {
        Self { service, max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES }
    }

    #[must_use]
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/embed", post(handlers::enroll::embed))
        .route("/create-user", post(handlers::enroll::create_user))
        .route("/identify", post(handlers::identify::identify))
        .route("/identify-face", post(handlers::identify::identify_face))
        .route("/recognize", post(handlers::identify::recognize))
        .route("/embeddings/{person_id}", get(handlers::records::get_person_embeddings))
        .route("/reset-database", get(handlers::admin::reset_database))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
