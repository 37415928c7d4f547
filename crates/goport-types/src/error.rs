use thiserror::Error;

/// Failures of the resolution pipeline, by kind.
///
/// Which of these abort a run is decided by the caller: coordinate and identity errors
/// are fatal to the package being processed, manifest errors only drive probe fallback,
/// and checksum errors degrade to the sentinel record in best-effort mode.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("invalid package coordinate `{coordinate}`: {reason}")]
    CoordinateFormat { coordinate: String, reason: String },

    #[error("could not resolve identity of `{coordinate}`: {reason}")]
    IdentityResolution { coordinate: String, reason: String },

    #[error("{file} not available: {reason}")]
    ManifestNotFound { file: &'static str, reason: String },

    #[error("no dependency manifest found for `{coordinate}` at {version}")]
    AllManifestsExhausted { coordinate: String, version: String },

    #[error("could not fetch archive of `{coordinate}` from {url}: {reason}")]
    ArchiveFetch {
        coordinate: String,
        url: String,
        reason: String,
    },

    #[error("unsupported host {host}: {reason}")]
    UnsupportedHost { host: String, reason: String },
}

impl PortError {
    pub fn coordinate_format(coordinate: &str, reason: impl Into<String>) -> Self {
        PortError::CoordinateFormat {
            coordinate: coordinate.to_string(),
            reason: reason.into(),
        }
    }

    pub fn identity(coordinate: &str, reason: impl Into<String>) -> Self {
        PortError::IdentityResolution {
            coordinate: coordinate.to_string(),
            reason: reason.into(),
        }
    }

    pub fn manifest_not_found(file: &'static str, reason: impl Into<String>) -> Self {
        PortError::ManifestNotFound {
            file,
            reason: reason.into(),
        }
    }

    /// Errors that only degrade a checksum rather than abort the package.
    pub fn is_checksum_failure(&self) -> bool {
        matches!(
            self,
            PortError::ArchiveFetch { .. } | PortError::UnsupportedHost { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_errors_carry_url_in_message() {
        let err = PortError::ArchiveFetch {
            coordinate: "github.com/foo/bar".to_string(),
            url: "https://github.com/foo/bar/archive/v1.tar.gz".to_string(),
            reason: "HTTP status 404".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("github.com/foo/bar"));
        assert!(msg.contains("https://github.com/foo/bar/archive/v1.tar.gz"));
        assert!(err.is_checksum_failure());
    }

    #[test]
    fn identity_errors_are_not_checksum_failures() {
        assert!(!PortError::identity("example.org/x", "no go-import meta tag").is_checksum_failure());
        assert!(!PortError::coordinate_format("github.com", "too few segments").is_checksum_failure());
    }
}
