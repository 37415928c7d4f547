use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `goport.toml` schema v1.
///
/// Every key is optional; missing keys fall back to built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GoportConfigV1 {
    /// Optional schema string for tooling (`goport.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Replace failed archive checksums with zeros instead of aborting (default `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_effort: Option<bool>,

    /// Repository subdirectory holding the lock files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_dir: Option<String>,

    /// User-Agent sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// `quiet`, `normal` (default) or `debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,
}
