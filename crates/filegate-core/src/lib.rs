//! Filegate Core Library
//!
//! This crate provides the domain types, acceptance policy, error taxonomy,
//! and pure validation shared across all Filegate components.

pub mod error;
pub mod outcome;
pub mod policy;
pub mod request;
pub mod transport;
pub mod validation;

// Re-export commonly used types
pub use error::{LogLevel, UploadError, UploadResult};
pub use outcome::UploadOutcome;
pub use policy::{UploadPolicy, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_SIZE_BYTES};
pub use request::UploadRequest;
pub use transport::TransportCode;
