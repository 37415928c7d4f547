use goport_types::{Host, PortError, ResolvedIdentity};

/// URL of a single file at `version` inside the identity's repository.
///
/// `dir` is an optional subdirectory holding the lock files; leading and trailing slashes
/// are ignored.
pub fn raw_file_url(
    identity: &ResolvedIdentity,
    version: &str,
    dir: Option<&str>,
    file: &str,
) -> Result<String, PortError> {
    let repo = identity.repo_path();
    let path = match dir.map(|d| d.trim_matches('/')).filter(|d| !d.is_empty()) {
        Some(dir) => format!("{dir}/{file}"),
        None => file.to_string(),
    };
    match &identity.host {
        Host::GitHub => Ok(format!(
            "https://raw.githubusercontent.com/{repo}/{version}/{path}"
        )),
        Host::Bitbucket => Ok(format!("https://bitbucket.org/{repo}/raw/{version}/{path}")),
        Host::SourceHut => Ok(format!("https://git.sr.ht/{repo}/blob/{version}/{path}")),
        Host::GitLab => Ok(format!("https://gitlab.com/{repo}/-/raw/{version}/{path}")),
        Host::Custom(domain) => Err(PortError::UnsupportedHost {
            host: domain.clone(),
            reason: "no raw file URL convention is known for this host".to_string(),
        }),
    }
}
