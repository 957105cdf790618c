use std::path::PathBuf;

use crate::error::UploadError;

/// Terminal result of a validation or upload attempt
///
/// `message` is set on both paths; `stored_path` only when an upload wrote
/// the file; `error` exactly when `succeeded` is false. The constructors
/// keep those three in agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub succeeded: bool,
    pub stored_path: Option<PathBuf>,
    pub message: String,
    pub error: Option<UploadError>,
}

impl UploadOutcome {
    /// Successful validation; nothing was written
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            stored_path: None,
            message: message.into(),
            error: None,
        }
    }

    /// Successful upload with the path the file now lives at
    pub fn stored(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            stored_path: Some(path),
            message: message.into(),
            error: None,
        }
    }

    /// Failed attempt; the message mirrors the error's `Display`
    pub fn failure(error: UploadError) -> Self {
        let message = error.to_string();
        Self {
            succeeded: false,
            stored_path: None,
            message,
            error: Some(error),
        }
    }
}
