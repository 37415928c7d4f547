use goport_types::{Host, PortError, ResolvedIdentity};

/// Why an archive is being fetched.
///
/// GitHub serves the same tree under two URL shapes, and the recipe's build system
/// downloads the package itself and its vendored dependencies through different ones.
/// The checksum must be taken over the exact URL that will be fetched at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveRole {
    Primary,
    Vendored,
}

/// Download URL of the archive of `identity` at `version`.
pub fn archive_url(
    identity: &ResolvedIdentity,
    version: &str,
    role: ArchiveRole,
) -> Result<String, PortError> {
    let repo = identity.repo_path();
    match (&identity.host, role) {
        (Host::GitHub, ArchiveRole::Primary) => Ok(format!(
            "https://github.com/{repo}/archive/{version}.tar.gz"
        )),
        (Host::GitHub, ArchiveRole::Vendored) => {
            Ok(format!("https://github.com/{repo}/tarball/{version}"))
        }
        (Host::Bitbucket, _) => Ok(format!(
            "https://bitbucket.org/{repo}/get/{version}.tar.gz"
        )),
        (Host::SourceHut, _) => Ok(format!(
            "https://git.sr.ht/{repo}/archive/{version}.tar.gz"
        )),
        (Host::GitLab, _) => Err(PortError::UnsupportedHost {
            host: identity.host.to_string(),
            reason: "gitlab.com regenerates archives on every request, so their checksums \
                     are not stable"
                .to_string(),
        }),
        // Self-hosted GitLab layout.
        (Host::Custom(domain), _) => Ok(format!(
            "https://{domain}/{repo}/-/archive/{version}/{project}-{version}.tar.gz",
            project = identity.project
        )),
    }
}
