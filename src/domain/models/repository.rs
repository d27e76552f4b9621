use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::PublishError;

/// Bearer token used to authenticate against the issue tracker
///
/// The secret never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting empty or whitespace-only values
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// The raw token, for building the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// A repository identifier of the form `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// The companion wiki repository, `owner/name.wiki`
    ///
    /// GitHub exposes no page-creation API for it, so it is only ever reported.
    pub fn wiki_full_name(&self) -> String {
        format!("{}.wiki", self.full_name())
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryRef {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            PublishError::Configuration(format!(
                "Invalid repository '{s}', expected owner/name"
            ))
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

/// A repository the tracker confirmed exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryHandle {
    /// Canonical `owner/name` as reported by the API
    pub full_name: String,

    /// Web URL of the repository
    pub html_url: String,
}

impl RepositoryHandle {
    /// Web URL of the repository wiki tab
    pub fn wiki_url(&self) -> String {
        format!("{}/wiki", self.html_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejects_empty() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("ghp_secretvalue").unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("ghp_secretvalue"));
        assert_eq!(credential.expose(), "ghp_secretvalue");
    }

    #[test]
    fn test_parse_repository() {
        let repo: RepositoryRef = "tungoldshou/vantun".parse().unwrap();
        assert_eq!(repo.owner(), "tungoldshou");
        assert_eq!(repo.name(), "vantun");
        assert_eq!(repo.full_name(), "tungoldshou/vantun");
        assert_eq!(repo.wiki_full_name(), "tungoldshou/vantun.wiki");
        assert_eq!(repo.to_string(), "tungoldshou/vantun");
    }

    #[test]
    fn test_parse_repository_rejects_malformed() {
        for input in ["", "vantun", "/vantun", "tungoldshou/", "a/b/c"] {
            let result = input.parse::<RepositoryRef>();
            assert!(
                matches!(result, Err(PublishError::Configuration(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_wiki_url() {
        let handle = RepositoryHandle {
            full_name: "octo/docs".to_string(),
            html_url: "https://github.com/octo/docs".to_string(),
        };
        assert_eq!(handle.wiki_url(), "https://github.com/octo/docs/wiki");
    }
}
