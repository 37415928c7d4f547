//! Identity resolution: coordinate in, concrete host/author/project out.
//!
//! Known hosts resolve from the coordinate alone. Everything else is a vanity import and is
//! resolved by asking the domain itself (`?go-get=1`) where the sources live.

#![forbid(unsafe_code)]

mod rules;
mod vanity;

use goport_fetch::Fetcher;
use goport_types::{PortError, ResolvedIdentity};

pub use vanity::{GoImport, lookup_url, parse_go_imports};

/// Fuzz-friendly entry points. These never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a `?go-get=1` HTML page.
    pub fn parse_go_import_page(html: &str) -> usize {
        super::vanity::parse_go_imports(html).len()
    }

    /// Apply the static host rules to an arbitrary coordinate.
    pub fn resolve_static(coordinate: &str) -> bool {
        matches!(super::rules::resolve_static(coordinate), Some(Ok(_)))
    }
}

/// Resolve `coordinate` to its network identity.
///
/// The version is not consulted by any current rule; it is accepted so callers resolve
/// dependencies and packages the same way.
pub fn resolve_identity(
    fetcher: &dyn Fetcher,
    coordinate: &str,
    version: &str,
) -> Result<ResolvedIdentity, PortError> {
    tracing::debug!(coordinate, version, "resolving identity");
    if let Some(resolved) = rules::resolve_static(coordinate) {
        return resolved;
    }
    vanity::resolve_vanity(fetcher, coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goport_test_util::StubFetcher;
    use goport_types::Host;

    #[test]
    fn static_hosts_never_touch_the_network() {
        let stub = StubFetcher::new();
        for coordinate in [
            "github.com/foo/bar",
            "bitbucket.org/foo/bar",
            "golang.org/x/net",
            "gopkg.in/yaml.v2",
            "google.golang.org/protobuf",
        ] {
            resolve_identity(&stub, coordinate, "v1.0.0").expect(coordinate);
        }
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn other_hosts_use_vanity_lookup() {
        let stub = StubFetcher::new().ok(
            "https://go.uber.org/zap?go-get=1",
            r#"<meta name="go-import" content="go.uber.org/zap git https://github.com/uber-go/zap">"#,
        );
        let id = resolve_identity(&stub, "go.uber.org/zap", "v1.24.0").expect("resolves");
        assert_eq!(id.host, Host::GitHub);
        assert_eq!(id.author.as_deref(), Some("uber-go"));
        assert_eq!(id.project, "zap");
        assert_eq!(id.coordinate, "github.com/uber-go/zap");
        assert_eq!(id.alias.as_deref(), Some("go.uber.org/zap"));
    }

    #[test]
    fn static_rule_errors_are_not_retried_via_vanity() {
        let stub = StubFetcher::new();
        let err = resolve_identity(&stub, "github.com/foo", "v1").expect_err("too short");
        assert!(matches!(err, PortError::CoordinateFormat { .. }));
        assert!(stub.requests().is_empty());
    }
}
