//! `glide.lock`: YAML with a top-level `imports` list.

use crate::ManifestProbe;
use goport_types::ids::FILE_GLIDE_LOCK;
use goport_types::{DependencyRecord, PortError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GlideLock {
    #[serde(default)]
    imports: Vec<GlideImport>,
}

#[derive(Debug, Deserialize)]
struct GlideImport {
    name: String,
    version: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlideLockProbe;

impl ManifestProbe for GlideLockProbe {
    fn file_name(&self) -> &'static str {
        FILE_GLIDE_LOCK
    }

    fn parse(&self, raw: &[u8]) -> Result<Vec<DependencyRecord>, PortError> {
        let lock: GlideLock = serde_yaml::from_slice(raw)
            .map_err(|e| PortError::manifest_not_found(FILE_GLIDE_LOCK, e.to_string()))?;
        Ok(lock
            .imports
            .into_iter()
            .map(|i| DependencyRecord::new(i.name, i.version))
            .collect())
    }
}
