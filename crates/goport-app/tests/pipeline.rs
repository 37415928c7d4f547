use goport_app::{
    OutputFormat, PackageRequest, PipelineOptions, render_bundle, resolve_batch, resolve_package,
};
use goport_checksum::checksum_bytes;
use goport_test_util::StubFetcher;
use goport_types::{DependencyRecord, PortError};

const GO_SUM: &str = "\
golang.org/x/crypto v0.0.0-20200622213623-75b288015ac9 h1:psW17arqaxU48Z5kZ0CQnkZWQJsqcURM6tKiBApRjXI=
golang.org/x/crypto v0.0.0-20200622213623-75b288015ac9/go.mod h1:LzIPMQfyMNhhGPhUkYOs5KpL4U8rLKemX1yGLhDgUto=
gopkg.in/yaml.v2 v2.4.0 h1:D8xgwECY7CYvx+Y2n4sBz93Jn9JRvxdiyyo8CTfuKaY=
";

fn request(coordinate: &str, version: &str) -> PackageRequest {
    PackageRequest::new(coordinate, version)
}

fn strict() -> PipelineOptions {
    PipelineOptions {
        best_effort: false,
        manifest_dir: None,
    }
}

#[test]
fn go_sum_dependencies_are_resolved_and_checksummed() {
    let stub = StubFetcher::new()
        .ok("https://raw.githubusercontent.com/foo/bar/v1.0.0/go.sum", GO_SUM)
        .ok("https://github.com/foo/bar/archive/v1.0.0.tar.gz", "main archive")
        .ok("https://github.com/go-yaml/yaml/tarball/v2.4.0", "yaml archive")
        .ok("https://github.com/golang/crypto/tarball/75b288015ac9", "crypto archive");

    let bundle = resolve_package(
        &stub,
        &request("github.com/foo/bar", "v1.0.0"),
        &PipelineOptions::default(),
    )
    .expect("resolves");

    assert_eq!(bundle.package_id, "github.com/foo/bar");
    assert_eq!(bundle.alias, None);
    assert_eq!(
        bundle.dependencies,
        vec![
            DependencyRecord::new("gopkg.in/yaml.v2", "v2.4.0"),
            DependencyRecord::new("golang.org/x/crypto", "75b288015ac9"),
        ]
    );
    let checksums: Vec<_> = bundle
        .checksums
        .iter()
        .map(|e| (e.coordinate.as_str(), e.checksum.clone()))
        .collect();
    assert_eq!(
        checksums,
        vec![
            ("github.com/foo/bar", checksum_bytes(b"main archive")),
            ("gopkg.in/yaml.v2", checksum_bytes(b"yaml archive")),
            ("golang.org/x/crypto", checksum_bytes(b"crypto archive")),
        ]
    );
}

#[test]
fn glide_lock_is_used_when_go_sum_is_missing() {
    let stub = StubFetcher::new()
        .ok(
            "https://raw.githubusercontent.com/foo/bar/v1.0.0/glide.lock",
            "imports:\n- name: github.com/baz/qux\n  version: abc123\n",
        )
        .ok("https://github.com/foo/bar/archive/v1.0.0.tar.gz", "main")
        .ok("https://github.com/baz/qux/tarball/abc123", "dep");

    let bundle = resolve_package(
        &stub,
        &request("github.com/foo/bar", "v1.0.0"),
        &PipelineOptions::default(),
    )
    .expect("resolves");

    assert_eq!(
        bundle.dependencies,
        vec![DependencyRecord::new("github.com/baz/qux", "abc123")]
    );
    assert_eq!(bundle.checksums.len(), 2);
    assert_eq!(bundle.checksums[1].checksum, checksum_bytes(b"dep"));
}

#[test]
fn manifest_dir_is_applied_to_lock_file_urls() {
    let stub = StubFetcher::new()
        .ok(
            "https://raw.githubusercontent.com/foo/bar/v1.0.0/v2/GLOCKFILE",
            "github.com/baz/qux abc123\n",
        )
        .ok("https://github.com/foo/bar/archive/v1.0.0.tar.gz", "main")
        .ok("https://github.com/baz/qux/tarball/abc123", "dep");
    let opts = PipelineOptions {
        best_effort: true,
        manifest_dir: Some("v2".to_string()),
    };

    let bundle =
        resolve_package(&stub, &request("github.com/foo/bar", "v1.0.0"), &opts).expect("resolves");
    assert_eq!(bundle.dependencies.len(), 1);
    assert!(
        stub.requests()
            .iter()
            .any(|url| url == "https://raw.githubusercontent.com/foo/bar/v1.0.0/v2/go.sum")
    );
}

#[test]
fn missing_archive_becomes_sentinel_and_batch_continues() {
    let stub = StubFetcher::new().ok("https://github.com/foo/two/archive/v2.0.0.tar.gz", "two");

    let bundles = resolve_batch(
        &stub,
        &[
            request("github.com/foo/one", "v1.0.0"),
            request("github.com/foo/two", "v2.0.0"),
        ],
        &PipelineOptions::default(),
    )
    .expect("best effort");

    assert_eq!(bundles.len(), 2);
    assert!(bundles[0].checksums[0].checksum.is_unavailable());
    assert_eq!(bundles[1].checksums[0].checksum, checksum_bytes(b"two"));
    assert!(bundles.iter().all(|b| b.dependencies.is_empty()));
}

#[test]
fn strict_mode_fails_on_missing_archive() {
    let stub = StubFetcher::new();
    let err = resolve_package(&stub, &request("github.com/foo/bar", "v1.0.0"), &strict())
        .expect_err("strict");
    match err {
        PortError::ArchiveFetch { url, .. } => {
            assert_eq!(url, "https://github.com/foo/bar/archive/v1.0.0.tar.gz");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unresolvable_dependency_gets_sentinel_even_in_strict_mode() {
    let stub = StubFetcher::new()
        .ok(
            "https://raw.githubusercontent.com/foo/bar/v1.0.0/GLOCKFILE",
            "example.invalid/lib 1.2.3\n",
        )
        .ok("https://github.com/foo/bar/archive/v1.0.0.tar.gz", "main");

    let bundle = resolve_package(&stub, &request("github.com/foo/bar", "v1.0.0"), &strict())
        .expect("dependency identity failures are not fatal");
    assert_eq!(bundle.checksums.len(), 2);
    assert_eq!(bundle.checksums[1].coordinate, "example.invalid/lib");
    assert!(bundle.checksums[1].checksum.is_unavailable());
}

#[test]
fn batch_halts_at_first_fatal_error() {
    let stub = StubFetcher::new();
    let err = resolve_batch(
        &stub,
        &[
            request("github.com/short", "v1.0.0"),
            request("github.com/foo/bar", "v1.0.0"),
        ],
        &PipelineOptions::default(),
    )
    .expect_err("bad coordinate");

    assert!(format!("{err:#}").contains("github.com/short"));
    let port = err.downcast_ref::<PortError>().expect("typed cause");
    assert!(matches!(port, PortError::CoordinateFormat { .. }));
    assert!(stub.requests().is_empty());
}

#[test]
fn vanity_package_keeps_alias() {
    let stub = StubFetcher::new()
        .ok(
            "https://go.uber.org/zap?go-get=1",
            r#"<meta name="go-import" content="go.uber.org/zap git https://github.com/uber-go/zap">"#,
        )
        .ok("https://github.com/uber-go/zap/archive/v1.16.0.tar.gz", "zap");

    let bundle = resolve_package(
        &stub,
        &request("go.uber.org/zap", "v1.16.0"),
        &PipelineOptions::default(),
    )
    .expect("resolves");

    assert_eq!(bundle.package_id, "github.com/uber-go/zap");
    assert_eq!(bundle.alias.as_deref(), Some("go.uber.org/zap"));

    let portfile = render_bundle(&bundle, OutputFormat::Portfile).expect("renders");
    assert!(portfile.contains("go.setup            github.com/uber-go/zap 1.16.0 v\n"));
    assert!(portfile.contains("go.package          go.uber.org/zap\n"));
}

#[test]
fn identical_inputs_give_identical_bundles() {
    let stub = || {
        StubFetcher::new()
            .ok("https://raw.githubusercontent.com/foo/bar/v1.0.0/go.sum", GO_SUM)
            .ok("https://github.com/foo/bar/archive/v1.0.0.tar.gz", "main archive")
    };
    let req = request("github.com/foo/bar", "v1.0.0");
    let a = resolve_package(&stub(), &req, &PipelineOptions::default()).expect("first");
    let b = resolve_package(&stub(), &req, &PipelineOptions::default()).expect("second");
    assert_eq!(a, b);
    assert_eq!(
        render_bundle(&a, OutputFormat::Json).unwrap(),
        render_bundle(&b, OutputFormat::Json).unwrap()
    );
}
