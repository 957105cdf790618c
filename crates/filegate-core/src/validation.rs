//! Policy checks shared by the validation-only and upload paths
//!
//! Extension is checked before size; only the first failing check is
//! reported.

use crate::error::{UploadError, UploadResult};
use crate::policy::UploadPolicy;
use crate::request::UploadRequest;

/// Run the policy checks for a staged upload
///
/// `request` is `None` when the caller never supplied a file. A request
/// whose name carries no usable extension fails the allow-list check.
pub fn evaluate(request: Option<&UploadRequest>, policy: &UploadPolicy) -> UploadResult<()> {
    let request = request.ok_or(UploadError::NoFileSelected)?;

    let extension_allowed = request
        .extension()
        .map(|extension| policy.allows(extension))
        .unwrap_or(false);
    if !extension_allowed {
        return Err(UploadError::ExtensionNotAllowed {
            allowed: policy.allowed_extensions.clone(),
        });
    }

    if request.declared_size() > policy.max_size_bytes {
        return Err(UploadError::FileTooLarge {
            size: request.declared_size(),
            max: policy.max_size_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportCode;

    fn request(file_name: &str, declared_size: u64) -> UploadRequest {
        UploadRequest::new(file_name, declared_size, "/tmp/staged", TransportCode::Ok)
    }

    #[test]
    fn test_missing_request_fails() {
        let result = evaluate(None, &UploadPolicy::default());
        assert!(matches!(result, Err(UploadError::NoFileSelected)));
    }

    #[test]
    fn test_valid_request_passes() {
        let result = evaluate(Some(&request("photo.jpg", 500)), &UploadPolicy::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let policy = UploadPolicy {
            allowed_extensions: vec!["jpg".to_string()],
            ..UploadPolicy::default()
        };
        let result = evaluate(Some(&request("PHOTO.JPG", 500)), &policy);
        assert!(result.is_ok());
    }

    #[test]
    fn test_disallowed_extension_fails() {
        let result = evaluate(Some(&request("archive.zip", 100)), &UploadPolicy::default());
        match result {
            Err(UploadError::ExtensionNotAllowed { allowed }) => {
                assert_eq!(allowed.len(), 9);
            }
            _ => panic!("Expected ExtensionNotAllowed"),
        }
    }

    #[test]
    fn test_name_without_extension_fails() {
        let result = evaluate(Some(&request("noext", 100)), &UploadPolicy::default());
        assert!(matches!(result, Err(UploadError::ExtensionNotAllowed { .. })));
    }

    #[test]
    fn test_oversized_request_fails() {
        let result = evaluate(Some(&request("huge.png", 5_000_000)), &UploadPolicy::default());
        match result {
            Err(UploadError::FileTooLarge { size, max }) => {
                assert_eq!(size, 5_000_000);
                assert_eq!(max, 1_000_000);
            }
            _ => panic!("Expected FileTooLarge"),
        }
    }

    #[test]
    fn test_size_equal_to_maximum_passes() {
        let result = evaluate(Some(&request("photo.jpg", 1_000_000)), &UploadPolicy::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_extension_failure_wins_over_size() {
        let result = evaluate(
            Some(&request("archive.zip", 5_000_000)),
            &UploadPolicy::default(),
        );
        assert!(matches!(result, Err(UploadError::ExtensionNotAllowed { .. })));
    }
}
