//! `GLOCKFILE`: `<import path> <revision>` per line.

use crate::ManifestProbe;
use goport_types::ids::FILE_GLOCKFILE;
use goport_types::{DependencyRecord, PortError};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlockfileProbe;

impl ManifestProbe for GlockfileProbe {
    fn file_name(&self) -> &'static str {
        FILE_GLOCKFILE
    }

    fn parse(&self, raw: &[u8]) -> Result<Vec<DependencyRecord>, PortError> {
        let text = std::str::from_utf8(raw).map_err(|e| {
            PortError::manifest_not_found(FILE_GLOCKFILE, format!("not UTF-8: {e}"))
        })?;
        Ok(text
            .lines()
            .filter_map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();
                match fields.as_slice() {
                    [name, version] => Some(DependencyRecord::new(*name, *version)),
                    _ => None,
                }
            })
            .collect())
    }
}
