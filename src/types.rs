use crate::error::StarChartError;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Raw JSON object GitHub returns for `GET /repos/{owner}/{repo}`.
pub type RepositoryDescriptor = Map<String, Value>;

/// An `owner/repo` pair as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoSlug {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoSlug {
    type Err = StarChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
                Ok(RepoSlug::new(*owner, *repo))
            }
            _ => Err(StarChartError::InvalidRepoSlug(format!(
                "expected owner/repo, got {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
