use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SignoffError;

/// Repository owner and name, as in `GITHUB_REPOSITORY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCoordinates {
    pub owner: String,
    pub name: String,
}

impl RepoCoordinates {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoCoordinates {
    type Err = SignoffError;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        let mut parts = slug.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(SignoffError::InvalidInput(format!(
                "repository must be of the form owner/name, got {slug:?}"
            ))),
        }
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The pull request a single run checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestContext {
    pub repo: RepoCoordinates,
    /// Pull requests share their number with the backing issue.
    pub number: u64,
    pub author: String,
}

impl fmt::Display for PullRequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_owner_and_name() {
        let repo: RepoCoordinates = "acme/widgets".parse().unwrap();
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");
        assert_eq!(repo.to_string(), "acme/widgets");
    }

    #[test]
    fn parse_rejects_missing_name() {
        for bad in ["acme", "acme/", "/widgets", "", "a/b/c"] {
            let err = bad.parse::<RepoCoordinates>().unwrap_err();
            assert!(
                matches!(err, SignoffError::InvalidInput(_)),
                "expected InvalidInput for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn context_display() {
        let ctx = PullRequestContext {
            repo: RepoCoordinates::new("acme", "widgets"),
            number: 42,
            author: "octocat".into(),
        };
        assert_eq!(ctx.to_string(), "acme/widgets#42");
    }
}
