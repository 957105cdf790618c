use std::fs;
use std::io;
use std::path::Path;

use filegate_core::validation;
use filegate_core::{LogLevel, UploadError, UploadOutcome, UploadPolicy, UploadRequest};

/// Message returned when the policy checks pass
const CHECK_PASSED_MESSAGE: &str = "You are good to go!";

/// Message returned when the file has been moved into place
const UPLOAD_SUCCESS_MESSAGE: &str = "File upload successful";

/// Base name used when the caller-supplied one has no file name component
const FALLBACK_BASE_NAME: &str = "file";

/// Validates one staged upload and moves it into place
///
/// An instance is scoped to a single upload request. Policy may be adjusted
/// with [`configure`](Self::configure) before validation; outcomes are owned
/// values, so later policy changes never affect an outcome already produced.
pub struct UploadValidator {
    request: Option<UploadRequest>,
    policy: UploadPolicy,
}

impl UploadValidator {
    /// Create a validator for a staged upload with the default policy
    pub fn new(request: UploadRequest) -> Self {
        Self {
            request: Some(request),
            policy: UploadPolicy::default(),
        }
    }

    /// Create a validator with no staged upload
    ///
    /// Every validation and upload call on it fails with
    /// [`UploadError::NoFileSelected`].
    pub fn without_request() -> Self {
        Self {
            request: None,
            policy: UploadPolicy::default(),
        }
    }

    /// Replace the policy defaults
    ///
    /// An empty `allowed_extensions` keeps the current allow-list rather
    /// than allowing nothing.
    pub fn configure(&mut self, allowed_extensions: Vec<String>, max_size_bytes: u64) {
        if !allowed_extensions.is_empty() {
            self.policy.allowed_extensions = allowed_extensions;
        }
        self.policy.max_size_bytes = max_size_bytes;
    }

    pub fn request(&self) -> Option<&UploadRequest> {
        self.request.as_ref()
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Run the extension and size checks without touching the filesystem
    ///
    /// Extension is checked before size and only the first failing check is
    /// reported. `stored_path` is never set by this call.
    pub fn check_uploadable(&self) -> UploadOutcome {
        match validation::evaluate(self.request.as_ref(), &self.policy) {
            Ok(()) => UploadOutcome::success(CHECK_PASSED_MESSAGE),
            Err(error) => fail(error),
        }
    }

    /// Re-run the policy checks, then move the file into `destination_dir`
    ///
    /// On a validation failure nothing is touched on the filesystem.
    pub fn validate_and_upload(
        &self,
        destination_dir: impl AsRef<Path>,
        destination_base_name: &str,
    ) -> UploadOutcome {
        if let Err(error) = validation::evaluate(self.request.as_ref(), &self.policy) {
            return fail(error);
        }
        self.upload_file(destination_dir, destination_base_name)
    }

    /// Move the staged file to `destination_dir/{base name}.{extension}`
    ///
    /// Skips the policy checks; [`validate_and_upload`](Self::validate_and_upload)
    /// is the checked entry point. `destination_base_name` is reduced to its
    /// final path component, so a traversal-shaped name stays inside
    /// `destination_dir`. The directory itself is trusted as given and is
    /// created when missing (single level; an existing directory is fine, a
    /// missing parent is not).
    pub fn upload_file(
        &self,
        destination_dir: impl AsRef<Path>,
        destination_base_name: &str,
    ) -> UploadOutcome {
        let destination_dir = destination_dir.as_ref();

        let request = match self.request.as_ref() {
            Some(request) => request,
            None => return fail(UploadError::NoFileSelected),
        };

        // The target path cannot be composed without an extension.
        let extension = match request.extension() {
            Some(extension) => extension,
            None => {
                return fail(UploadError::ExtensionNotAllowed {
                    allowed: self.policy.allowed_extensions.clone(),
                })
            }
        };

        let target = destination_dir.join(format!(
            "{}.{}",
            base_name(destination_base_name),
            extension
        ));

        if let Err(error) = ensure_dir(destination_dir) {
            tracing::error!(
                dir = %destination_dir.display(),
                error = %error,
                "Failed to create destination directory"
            );
            return fail(UploadError::MoveFailed);
        }

        if !request.transport_code().is_ok() {
            return fail(UploadError::Transport(request.transport_code()));
        }

        let start = std::time::Instant::now();

        match move_file(request.temporary_path(), &target) {
            Ok(()) => {
                tracing::info!(
                    path = %target.display(),
                    declared_size_bytes = request.declared_size(),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "File upload successful"
                );
                UploadOutcome::stored(target, UPLOAD_SUCCESS_MESSAGE)
            }
            Err(error) => {
                tracing::error!(
                    from = %request.temporary_path().display(),
                    to = %target.display(),
                    error = %error,
                    "Failed to move uploaded file"
                );
                fail(UploadError::MoveFailed)
            }
        }
    }
}

/// Log the failure at its level and convert it to an outcome
fn fail(error: UploadError) -> UploadOutcome {
    log_failure(&error);
    UploadOutcome::failure(error)
}

fn log_failure(error: &UploadError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code = error_code, "Upload rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error_code, "Upload rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error_code, "Upload rejected");
        }
    }
}

/// Final path component of the caller-supplied base name
///
/// `".."`, `"."`, empty, and separator-only names have no file name
/// component and fall back to a fixed safe name.
fn base_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(FALLBACK_BASE_NAME)
}

/// Single-level create; an already existing directory is fine
fn ensure_dir(dir: &Path) -> io::Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(error) => Err(error),
    }
}

/// Rename, falling back to copy+delete when the rename crosses filesystems
///
/// A source left behind after a successful copy is logged, not surfaced: the
/// destination file is complete at that point.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            if let Err(remove_error) = fs::remove_file(from) {
                tracing::warn!(
                    path = %from.display(),
                    error = %remove_error,
                    "Uploaded file copied but source removal failed"
                );
            }
            Ok(())
        }
        Err(error) => Err(error),
    }
}
