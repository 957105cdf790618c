//! Error types module
//!
//! This module provides the error taxonomy for upload validation and
//! persistence. A failed upload is an expected outcome, not a process fault:
//! every variant renders its user-facing message through `Display` and
//! carries a stable machine-readable code plus a log level for reporting.

use crate::transport::TransportCode;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for failures reported by the transport layer
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Upload validation and persistence errors
///
/// `Display` is the single source of user-facing message text; outcomes copy
/// it verbatim so callers never string-match to branch on a failure kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select a file")]
    NoFileSelected,

    #[error("{}", extension_not_allowed_message(.allowed))]
    ExtensionNotAllowed { allowed: Vec<String> },

    #[error("The file is larger than the file size set; select another image or increase file size capacity")]
    FileTooLarge { size: u64, max: u64 },

    #[error("{}", .0.failure_message())]
    Transport(TransportCode),

    #[error("The file could not be moved to its destination")]
    MoveFailed,
}

/// Enumerates the allow-list with the verb agreeing in number: "is" when
/// exactly one extension is allowed, "are" otherwise.
fn extension_not_allowed_message(allowed: &[String]) -> String {
    let verb = if allowed.len() == 1 { "is" } else { "are" };
    format!(
        "This file extension is not allowed, only {} {} allowed",
        allowed.join(", "),
        verb
    )
}

impl UploadError {
    /// Machine-readable error code (e.g., "FILE_TOO_LARGE")
    pub fn error_code(&self) -> &'static str {
        match self {
            UploadError::NoFileSelected => "NO_FILE_SELECTED",
            UploadError::ExtensionNotAllowed { .. } => "EXTENSION_NOT_ALLOWED",
            UploadError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            UploadError::Transport(_) => "TRANSPORT_ERROR",
            UploadError::MoveFailed => "MOVE_FAILED",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            UploadError::NoFileSelected
            | UploadError::ExtensionNotAllowed { .. }
            | UploadError::FileTooLarge { .. } => LogLevel::Debug,
            UploadError::Transport(_) => LogLevel::Warn,
            UploadError::MoveFailed => LogLevel::Error,
        }
    }
}

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;
