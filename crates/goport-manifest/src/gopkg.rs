//! `Gopkg.lock`: TOML with `[[projects]]` tables pinned by `revision`.

use crate::ManifestProbe;
use goport_types::ids::FILE_GOPKG_LOCK;
use goport_types::{DependencyRecord, PortError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GopkgLock {
    #[serde(default)]
    projects: Vec<GopkgProject>,
}

/// `version` in Gopkg.lock is the human tag; `revision` is the commit that is fetched.
#[derive(Debug, Deserialize)]
struct GopkgProject {
    name: String,
    revision: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GopkgLockProbe;

impl ManifestProbe for GopkgLockProbe {
    fn file_name(&self) -> &'static str {
        FILE_GOPKG_LOCK
    }

    fn parse(&self, raw: &[u8]) -> Result<Vec<DependencyRecord>, PortError> {
        let text = std::str::from_utf8(raw).map_err(|e| {
            PortError::manifest_not_found(FILE_GOPKG_LOCK, format!("not UTF-8: {e}"))
        })?;
        let lock: GopkgLock = toml::from_str(text)
            .map_err(|e| PortError::manifest_not_found(FILE_GOPKG_LOCK, e.to_string()))?;
        Ok(lock
            .projects
            .into_iter()
            .map(|p| DependencyRecord::new(p.name, p.revision))
            .collect())
    }
}
