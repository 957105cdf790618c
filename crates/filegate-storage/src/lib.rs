//! Filegate Storage Library
//!
//! This crate moves validated uploads from their temporary location into a
//! destination directory. It provides [`UploadValidator`], which runs the
//! policy checks from `filegate-core` against a staged upload and, when they
//! pass, performs the move.

pub mod validator;

// Re-export commonly used types
pub use filegate_core::{
    LogLevel, TransportCode, UploadError, UploadOutcome, UploadPolicy, UploadRequest, UploadResult,
};
pub use validator::UploadValidator;
