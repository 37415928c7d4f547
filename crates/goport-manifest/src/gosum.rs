//! `go.sum`: `<module> <version>[/go.mod] <hash>` per line.

use crate::ManifestProbe;
use goport_types::ids::{BOGUS_GO_SUM_HASH, FILE_GO_SUM};
use goport_types::{DependencyRecord, PortError};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default)]
pub struct GoSumProbe;

impl ManifestProbe for GoSumProbe {
    fn file_name(&self) -> &'static str {
        FILE_GO_SUM
    }

    fn parse(&self, raw: &[u8]) -> Result<Vec<DependencyRecord>, PortError> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| PortError::manifest_not_found(FILE_GO_SUM, format!("not UTF-8: {e}")))?;
        Ok(parse_go_sum(text))
    }
}

/// Parse go.sum text into one record per module.
///
/// `/go.mod` hash lines and the known bogus record are skipped. When a module appears more
/// than once after normalization the last line wins. The result is sorted by name in
/// descending order, so a name that extends another (`a/bb` vs `a/b`) always comes first.
pub fn parse_go_sum(text: &str) -> Vec<DependencyRecord> {
    let mut modules: BTreeMap<String, DependencyRecord> = BTreeMap::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[module, version, hash] = fields.as_slice() else {
            continue;
        };
        if version.ends_with("/go.mod") || hash == BOGUS_GO_SUM_HASH {
            continue;
        }
        let name = normalize_module_name(module);
        let record = DependencyRecord::new(name, normalize_module_version(version));
        modules.insert(name.to_string(), record);
    }
    modules.into_values().rev().collect()
}

/// Strip a trailing major-version element (`github.com/foo/bar/v2` -> `github.com/foo/bar`).
pub fn normalize_module_name(module: &str) -> &str {
    match module.rsplit_once('/') {
        Some((head, last)) if is_major_suffix(last) => head,
        _ => module,
    }
}

fn is_major_suffix(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Reduce a module version to something that can be fetched as a tag or commit.
///
/// Pseudo-versions (`v0.0.0-20200101000000-abcdef123456`, optionally `+incompatible`)
/// become their commit hash; `vX.Y.Z+incompatible` becomes `vX.Y.Z`. Anything else is
/// returned unchanged.
pub fn normalize_module_version(version: &str) -> &str {
    let tokens: Vec<&str> = version.split(['-', '+']).collect();
    match tokens.as_slice() {
        [_, _, hash] | [_, _, hash, "incompatible"] => *hash,
        [tag, "incompatible"] => *tag,
        _ => version,
    }
}
