use crate::{ChecksumRecord, DependencyRecord, ResolvedIdentity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_BUNDLE_V1: &str = "goport.bundle.v1";

/// A checksum keyed by the coordinate whose archive it describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChecksumEntry {
    pub coordinate: String,
    pub checksum: ChecksumRecord,
}

/// Everything a recipe renderer needs for one package at one version.
///
/// `checksums[0]` is the package's own archive; the rest follow `dependencies`
/// one-to-one and in the same order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecipeBundle {
    pub schema: String,
    pub package_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub version: String,
    pub identity: ResolvedIdentity,
    pub checksums: Vec<ChecksumEntry>,
    #[serde(default)]
    pub dependencies: Vec<DependencyRecord>,
}

impl RecipeBundle {
    pub fn primary_checksum(&self) -> Option<&ChecksumRecord> {
        self.checksums.first().map(|entry| &entry.checksum)
    }

    /// Dependencies paired with their checksum entries.
    pub fn vendored(&self) -> impl Iterator<Item = (&DependencyRecord, &ChecksumEntry)> {
        self.dependencies
            .iter()
            .zip(self.checksums.iter().skip(1))
    }
}
