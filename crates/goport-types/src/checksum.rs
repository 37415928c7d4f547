use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Digests and size of one downloaded archive.
///
/// The all-zero record (see [`ChecksumRecord::unavailable`]) stands in for archives
/// that could not be fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChecksumRecord {
    /// Lowercase hex SHA-256.
    pub sha256: String,
    /// Lowercase hex RIPEMD-160.
    pub rmd160: String,
    /// Archive length in bytes.
    pub size: u64,
}

impl ChecksumRecord {
    pub fn unavailable() -> Self {
        Self {
            sha256: "0".to_string(),
            rmd160: "0".to_string(),
            size: 0,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_all_zero() {
        let sentinel = ChecksumRecord::unavailable();
        assert_eq!(sentinel.sha256, "0");
        assert_eq!(sentinel.rmd160, "0");
        assert_eq!(sentinel.size, 0);
        assert!(sentinel.is_unavailable());
    }

    #[test]
    fn real_record_is_not_sentinel() {
        let record = ChecksumRecord {
            sha256: "ab".to_string(),
            rmd160: "cd".to_string(),
            size: 2,
        };
        assert!(!record.is_unavailable());
    }

    #[test]
    fn sentinel_json_keeps_size_numeric() {
        let json = serde_json::to_value(ChecksumRecord::unavailable()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"sha256": "0", "rmd160": "0", "size": 0})
        );
    }
}
