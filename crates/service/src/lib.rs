//! Service layer for facevault
//!
//! Centralizes enrollment and identification logic between the HTTP/CLI
//! front ends and the storage, model, and upload backends.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod recognition_service;

pub use error::ServiceError;
pub use recognition_service::RecognitionService;
