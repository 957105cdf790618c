/// Extensions accepted when no policy is configured
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 9] = [
    "jpg", "png", "tiff", "txt", "doc", "docx", "pdf", "xls", "xlsx",
];

/// Maximum declared size accepted when no policy is configured (1 MB)
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 1_000_000;

/// Upload acceptance policy
///
/// Mutable until validation runs, then treated as read-only: outcomes are
/// owned values, so adjusting the policy afterward does not change an outcome
/// already produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPolicy {
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|extension| extension.to_string())
                .collect(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

impl UploadPolicy {
    /// Case-insensitive allow-list membership
    pub fn allows(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.allowed_extensions.len(), 9);
        assert_eq!(policy.max_size_bytes, 1_000_000);
    }

    #[test]
    fn test_allows_is_case_insensitive() {
        let policy = UploadPolicy::default();
        assert!(policy.allows("jpg"));
        assert!(policy.allows("JPG"));
        assert!(!policy.allows("zip"));
    }

    #[test]
    fn test_allows_matches_configured_case() {
        let policy = UploadPolicy {
            allowed_extensions: vec!["PnG".to_string()],
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        };
        assert!(policy.allows("png"));
        assert!(policy.allows("PNG"));
    }
}
