use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One dependency pinned by an upstream lock file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
