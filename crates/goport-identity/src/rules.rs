//! Static rules for hosts whose layout is known without asking the network.

use goport_types::host::{BITBUCKET, GITHUB};
use goport_types::ids::{
    GOLANG_MIRROR_AUTHOR, GOLANG_ORG, GOPKG_IN, PROTOBUF_AUTHOR, PROTOBUF_COORDINATE,
    PROTOBUF_PROJECT,
};
use goport_types::{Host, PortError, ResolvedIdentity};

/// `None` when the coordinate's host has no static rule.
pub(crate) fn resolve_static(coordinate: &str) -> Option<Result<ResolvedIdentity, PortError>> {
    if coordinate == PROTOBUF_COORDINATE {
        return Some(Ok(identity(
            Host::GitHub,
            PROTOBUF_AUTHOR,
            PROTOBUF_PROJECT,
            coordinate,
        )));
    }

    let parts: Vec<&str> = coordinate.split('/').collect();
    let resolved = match parts[0] {
        GITHUB | BITBUCKET => {
            require_segments(coordinate, &parts, 3)
                .map(|()| identity(Host::from_domain(parts[0]), parts[1], parts[2], coordinate))
        }
        GOLANG_ORG => require_segments(coordinate, &parts, 3)
            .map(|()| identity(Host::GitHub, GOLANG_MIRROR_AUTHOR, parts[2], coordinate)),
        GOPKG_IN => gopkg_in(coordinate, &parts),
        _ => return None,
    };
    Some(resolved)
}

fn require_segments(coordinate: &str, parts: &[&str], min: usize) -> Result<(), PortError> {
    if parts.len() < min {
        return Err(PortError::coordinate_format(
            coordinate,
            format!("expected at least {min} path segments, found {}", parts.len()),
        ));
    }
    if parts[..min].iter().any(|p| p.is_empty()) {
        return Err(PortError::coordinate_format(coordinate, "empty path segment"));
    }
    Ok(())
}

/// gopkg.in redirects to GitHub:
/// `gopkg.in/foo.v1` is `github.com/go-foo/foo`, `gopkg.in/foo/bar.v1` is `github.com/foo/bar`.
fn gopkg_in(coordinate: &str, parts: &[&str]) -> Result<ResolvedIdentity, PortError> {
    match parts {
        [_, name] if !name.is_empty() => {
            let project = strip_version_suffix(name);
            let author = format!("go-{project}");
            Ok(identity(Host::GitHub, &author, project, coordinate))
        }
        [_, author, name] if !author.is_empty() && !name.is_empty() => Ok(identity(
            Host::GitHub,
            author,
            strip_version_suffix(name),
            coordinate,
        )),
        _ => Err(PortError::coordinate_format(
            coordinate,
            "gopkg.in coordinates have the form gopkg.in/name.vN or gopkg.in/author/name.vN",
        )),
    }
}

/// Drop everything from the first `.` on (`yaml.v2` -> `yaml`).
fn strip_version_suffix(name: &str) -> &str {
    name.split_once('.').map_or(name, |(head, _)| head)
}

fn identity(host: Host, author: &str, project: &str, coordinate: &str) -> ResolvedIdentity {
    ResolvedIdentity {
        host,
        author: Some(author.to_string()),
        project: project.to_string(),
        coordinate: coordinate.to_string(),
        alias: None,
    }
}
