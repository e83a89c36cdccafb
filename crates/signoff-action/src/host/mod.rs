pub mod github;
pub mod mock;

use async_trait::async_trait;
use signoff_core::{Commit, RepoCoordinates};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("auth failed: {0}")]
    AuthFailed(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode response: {0}")]
    Decode(String),
}

/// Pull request metadata as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Login of the account that opened the pull request.
    pub author: String,
}

#[async_trait]
pub trait RepositoryHost: Send + Sync {
    fn name(&self) -> &str;

    async fn get_pull_request(
        &self,
        repo: &RepoCoordinates,
        number: u64,
    ) -> Result<PullRequest, HostError>;

    /// Commits in the order the host lists them.
    async fn list_commits(
        &self,
        repo: &RepoCoordinates,
        number: u64,
    ) -> Result<Vec<Commit>, HostError>;

    async fn create_issue_comment(
        &self,
        repo: &RepoCoordinates,
        issue_number: u64,
        body: &str,
    ) -> Result<(), HostError>;

    async fn add_labels(
        &self,
        repo: &RepoCoordinates,
        issue_number: u64,
        labels: &[&str],
    ) -> Result<(), HostError>;
}
