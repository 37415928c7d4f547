use crate::Host;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Concrete network identity of a package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedIdentity {
    #[schemars(with = "String")]
    pub host: Host,

    /// Owner path on the host. Absent only for single-segment vanity targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub project: String,

    /// Coordinate the package is known by after resolution.
    pub coordinate: String,

    /// Coordinate the caller supplied, kept only when it differs from `coordinate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ResolvedIdentity {
    /// `author/project`, or just `project` when there is no author.
    pub fn repo_path(&self) -> String {
        match &self.author {
            Some(author) => format!("{author}/{}", self.project),
            None => self.project.clone(),
        }
    }

    /// The coordinate as the caller wrote it (the alias if one was recorded).
    pub fn requested_coordinate(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(author: Option<&str>, alias: Option<&str>) -> ResolvedIdentity {
        ResolvedIdentity {
            host: Host::GitHub,
            author: author.map(str::to_string),
            project: "bar".to_string(),
            coordinate: "github.com/foo/bar".to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn repo_path_joins_author_and_project() {
        assert_eq!(identity(Some("foo"), None).repo_path(), "foo/bar");
        assert_eq!(identity(None, None).repo_path(), "bar");
    }

    #[test]
    fn requested_coordinate_prefers_alias() {
        assert_eq!(
            identity(Some("foo"), Some("example.org/bar")).requested_coordinate(),
            "example.org/bar"
        );
        assert_eq!(
            identity(Some("foo"), None).requested_coordinate(),
            "github.com/foo/bar"
        );
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_value(identity(None, None)).expect("serialize");
        assert!(json.get("author").is_none());
        assert!(json.get("alias").is_none());
        assert_eq!(json["host"], "github.com");
    }
}
