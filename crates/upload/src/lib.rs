//! External file-upload API client for facevault
//!
//! Enrollment photos sent as data URIs are forwarded to an upload service,
//! which stores the file and answers with its path.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod client;
pub mod error;

pub use client::UploadClient;
pub use error::UploadError;
