//! Vanity import discovery via `<meta name="go-import">`.

use goport_fetch::Fetcher;
use goport_types::{Host, PortError, ResolvedIdentity};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\s[^>]*>").expect("valid meta regex"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
        .expect("valid attribute regex")
});

/// One `go-import` declaration: `<prefix> <vcs> <repo-root>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoImport {
    pub prefix: String,
    pub vcs: String,
    pub repo_root: String,
}

/// URL queried to discover where a vanity coordinate really lives.
pub fn lookup_url(coordinate: &str) -> String {
    format!("https://{coordinate}?go-get=1")
}

/// Extract every well-formed `go-import` meta tag, in document order.
pub fn parse_go_imports(html: &str) -> Vec<GoImport> {
    META_TAG
        .find_iter(html)
        .filter_map(|tag| {
            let mut name = None;
            let mut content = None;
            for cap in ATTRIBUTE.captures_iter(tag.as_str()) {
                let value = cap
                    .get(2)
                    .or_else(|| cap.get(3))
                    .or_else(|| cap.get(4))
                    .map(|m| m.as_str());
                match cap[1].to_ascii_lowercase().as_str() {
                    "name" => name = value,
                    "content" => content = value,
                    _ => {}
                }
            }
            if name? != "go-import" {
                return None;
            }
            let fields: Vec<&str> = content?.split_whitespace().collect();
            match fields.as_slice() {
                [prefix, vcs, repo_root] => Some(GoImport {
                    prefix: prefix.to_string(),
                    vcs: vcs.to_string(),
                    repo_root: repo_root.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

pub(crate) fn resolve_vanity(
    fetcher: &dyn Fetcher,
    coordinate: &str,
) -> Result<ResolvedIdentity, PortError> {
    if coordinate.is_empty() || coordinate.starts_with('/') {
        return Err(PortError::coordinate_format(coordinate, "missing host"));
    }

    let url = lookup_url(coordinate);
    let response = fetcher
        .get(&url)
        .map_err(|e| PortError::identity(coordinate, format!("GET {url}: {e:#}")))?;
    if !response.is_ok() {
        return Err(PortError::identity(
            coordinate,
            format!("GET {url}: HTTP status {}", response.status),
        ));
    }

    let html = String::from_utf8_lossy(&response.body);
    // `mod` entries point at a module proxy, not at a repository.
    let import = parse_go_imports(&html)
        .into_iter()
        .find(|i| i.vcs != "mod" && coordinate.starts_with(&i.prefix))
        .ok_or_else(|| PortError::identity(coordinate, "no matching go-import meta tag"))?;
    tracing::debug!(
        coordinate,
        prefix = %import.prefix,
        repo_root = %import.repo_root,
        "vanity import"
    );

    let mut identity = identity_from_repo_root(coordinate, &import.repo_root)?;
    if identity.coordinate != coordinate {
        identity.alias = Some(coordinate.to_string());
    }
    Ok(identity)
}

fn identity_from_repo_root(
    coordinate: &str,
    repo_root: &str,
) -> Result<ResolvedIdentity, PortError> {
    let url = Url::parse(repo_root).map_err(|e| {
        PortError::identity(coordinate, format!("invalid repository root {repo_root}: {e}"))
    })?;
    let host_name = url.host_str().ok_or_else(|| {
        PortError::identity(coordinate, format!("repository root {repo_root} has no host"))
    })?;
    // An explicit port names a different server; keep it in the authority.
    let domain = match url.port() {
        Some(port) => format!("{host_name}:{port}"),
        None => host_name.to_string(),
    };

    let mut segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();
    if let Some(last) = segments.last_mut() {
        let name: &str = *last;
        *last = name.strip_suffix(".git").unwrap_or(name);
    }
    let Some((project, owner)) = segments.split_last() else {
        return Err(PortError::identity(
            coordinate,
            format!("repository root {repo_root} has no path"),
        ));
    };
    if project.is_empty() {
        return Err(PortError::identity(
            coordinate,
            format!("repository root {repo_root} has an empty project name"),
        ));
    }

    let host = Host::from_domain(&domain);
    let author = (!owner.is_empty()).then(|| owner.join("/"));
    let repo_path = match &author {
        Some(author) => format!("{author}/{project}"),
        None => project.to_string(),
    };
    Ok(ResolvedIdentity {
        coordinate: format!("{host}/{repo_path}"),
        host,
        author,
        project: project.to_string(),
        alias: None,
    })
}
