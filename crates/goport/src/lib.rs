//! Public facade over the goport resolution core.
//!
//! Re-exports the pieces a recipe generator needs: resolve an identity, extract its
//! dependencies, locate and checksum archives.

#![forbid(unsafe_code)]

pub use goport_checksum::{
    ArchiveRole, archive_url, checksum_bytes, checksum_or_unavailable, compute_checksum,
};
pub use goport_fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use goport_identity::resolve_identity;
pub use goport_manifest::{DependencyExtractor, Extraction, ManifestProbe, raw_file_url};
pub use goport_types::{
    ChecksumEntry, ChecksumRecord, DependencyRecord, Host, PortError, RecipeBundle,
    ResolvedIdentity, split_version_prefix,
};

#[cfg(test)]
mod tests {
    use super::*;
    use goport_test_util::StubFetcher;

    #[test]
    fn facade_covers_the_whole_flow() {
        let stub = StubFetcher::new()
            .ok(
                "https://raw.githubusercontent.com/go-yaml/yaml/v2.4.0/glide.lock",
                "imports:\n- name: gopkg.in/check.v1\n  version: 788fd7840127\n",
            )
            .ok("https://github.com/go-yaml/yaml/archive/v2.4.0.tar.gz", "yaml");

        let identity = resolve_identity(&stub, "gopkg.in/yaml.v2", "v2.4.0").expect("static");
        let deps = DependencyExtractor::default().extract(&stub, &identity, "v2.4.0", None);
        assert_eq!(deps, vec![DependencyRecord::new("gopkg.in/check.v1", "788fd7840127")]);

        let url = archive_url(&identity, "v2.4.0", ArchiveRole::Primary).expect("github");
        let record = compute_checksum(&stub, &identity.coordinate, &url).expect("served");
        assert_eq!(record, checksum_bytes(b"yaml"));
    }
}
