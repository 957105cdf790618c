use std::path::{Path, PathBuf};

use crate::transport::TransportCode;

/// A single staged upload, as reported by the transport layer
///
/// Immutable after construction. The extension is derived from the file name
/// at construction time and cannot be set independently; the declared size is
/// whatever the transport layer reported and is not trusted to match the
/// bytes on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    file_name: String,
    declared_size: u64,
    temporary_path: PathBuf,
    transport_code: TransportCode,
    extension: Option<String>,
}

impl UploadRequest {
    pub fn new(
        file_name: impl Into<String>,
        declared_size: u64,
        temporary_path: impl Into<PathBuf>,
        transport_code: TransportCode,
    ) -> Self {
        let file_name = file_name.into();
        let extension = derive_extension(&file_name);
        Self {
            file_name,
            declared_size,
            temporary_path: temporary_path.into(),
            transport_code,
            extension,
        }
    }

    /// Original client-supplied file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Byte count reported by the transport layer
    pub fn declared_size(&self) -> u64 {
        self.declared_size
    }

    /// Location where the transport layer staged the bytes
    pub fn temporary_path(&self) -> &Path {
        &self.temporary_path
    }

    pub fn transport_code(&self) -> TransportCode {
        self.transport_code
    }

    /// Lower-cased suffix derived from the file name, `None` when the name
    /// carries no usable extension
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Lower-cased substring after the final `.` of a file name
///
/// Returns `None` when the name has no `.` or nothing follows the final one;
/// such names carry no usable extension and fail the allow-list check.
fn derive_extension(file_name: &str) -> Option<String> {
    match file_name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => Some(suffix.to_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_named(file_name: &str) -> UploadRequest {
        UploadRequest::new(file_name, 100, "/tmp/staged", TransportCode::Ok)
    }

    #[test]
    fn test_extension_is_lowercased() {
        let request = request_named("PHOTO.JPG");
        assert_eq!(request.extension(), Some("jpg"));
    }

    #[test]
    fn test_extension_takes_final_suffix() {
        let request = request_named("archive.tar.gz");
        assert_eq!(request.extension(), Some("gz"));
    }

    #[test]
    fn test_no_dot_yields_no_extension() {
        let request = request_named("noext");
        assert_eq!(request.extension(), None);
    }

    #[test]
    fn test_trailing_dot_yields_no_extension() {
        let request = request_named("report.");
        assert_eq!(request.extension(), None);
    }

    #[test]
    fn test_leading_dot_name_is_all_extension() {
        let request = request_named(".gitignore");
        assert_eq!(request.extension(), Some("gitignore"));
    }

    #[test]
    fn test_accessors_return_constructor_values() {
        let request = UploadRequest::new(
            "report.pdf",
            500_000,
            "/tmp/abc",
            TransportCode::Partial,
        );
        assert_eq!(request.file_name(), "report.pdf");
        assert_eq!(request.declared_size(), 500_000);
        assert_eq!(request.temporary_path(), Path::new("/tmp/abc"));
        assert_eq!(request.transport_code(), TransportCode::Partial);
    }
}
