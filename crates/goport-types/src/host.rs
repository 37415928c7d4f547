use serde::{Deserialize, Serialize};
use std::fmt;

pub const GITHUB: &str = "github.com";
pub const BITBUCKET: &str = "bitbucket.org";
pub const GITLAB: &str = "gitlab.com";
pub const SOURCEHUT: &str = "git.sr.ht";

/// Code host serving a package's sources.
///
/// The four named hosts have fixed URL conventions. `Custom` is only produced by a
/// successful vanity-import lookup, so every value of this type is either a known host
/// or a domain that has been verified over the network.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Host {
    GitHub,
    Bitbucket,
    GitLab,
    SourceHut,
    Custom(String),
}

impl Host {
    /// Map a domain name onto a host, falling back to `Custom`.
    pub fn from_domain(domain: &str) -> Self {
        match domain.to_ascii_lowercase().as_str() {
            GITHUB => Host::GitHub,
            BITBUCKET => Host::Bitbucket,
            GITLAB => Host::GitLab,
            SOURCEHUT => Host::SourceHut,
            _ => Host::Custom(domain.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Host::GitHub => GITHUB,
            Host::Bitbucket => BITBUCKET,
            Host::GitLab => GITLAB,
            Host::SourceHut => SOURCEHUT,
            Host::Custom(domain) => domain,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Host::Custom(_))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Host {
    fn from(value: String) -> Self {
        Host::from_domain(&value)
    }
}

impl From<Host> for String {
    fn from(value: Host) -> Self {
        value.as_str().to_string()
    }
}
