//! Dependency extraction from upstream lock files.
//!
//! Each supported lock format is a [`ManifestProbe`]: bytes in, dependency list or
//! "not found" out. The [`DependencyExtractor`] fetches and tries them in priority order.

#![forbid(unsafe_code)]

mod extract;
mod glide;
mod glock;
mod gopkg;
mod gosum;
mod locate;
mod probe;

pub use extract::{DependencyExtractor, Extraction};
pub use glide::GlideLockProbe;
pub use glock::GlockfileProbe;
pub use gopkg::GopkgLockProbe;
pub use gosum::{GoSumProbe, normalize_module_name, normalize_module_version, parse_go_sum};
pub use locate::raw_file_url;
pub use probe::ManifestProbe;

/// Fuzz-friendly API for the lock file parsers. These functions never panic on any input.
pub mod fuzz {
    use super::*;

    /// Run every probe's parser over the same bytes.
    pub fn parse_all(raw: &[u8]) -> usize {
        DependencyExtractor::default()
            .probes()
            .iter()
            .filter_map(|p| p.parse(raw).ok())
            .map(|deps| deps.len())
            .sum()
    }
}
