use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use signoff_core::{Commit, RepoCoordinates};

use super::{HostError, PullRequest, RepositoryHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    GetPullRequest(u64),
    ListCommits(u64),
    CreateIssueComment { issue_number: u64, body: String },
    AddLabels { issue_number: u64, labels: Vec<String> },
}

/// A mock repository host for testing that serves a fixed pull request,
/// records every call, and can be told to fail any of them.
pub struct MockHost {
    author: String,
    commits: Vec<Commit>,
    calls: Mutex<Vec<HostCall>>,
    pull_fail: bool,
    commits_fail: bool,
    comment_fail: bool,
    labels_fail: bool,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockHost {
    pub fn new(commits: Vec<Commit>) -> Self {
        Self {
            author: "octocat".into(),
            commits,
            calls: Mutex::new(Vec::new()),
            pull_fail: false,
            commits_fail: false,
            comment_fail: false,
            labels_fail: false,
        }
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_pull_fail(mut self) -> Self {
        self.pull_fail = true;
        self
    }

    pub fn with_commits_fail(mut self) -> Self {
        self.commits_fail = true;
        self
    }

    pub fn with_comment_fail(mut self) -> Self {
        self.comment_fail = true;
        self
    }

    pub fn with_labels_fail(mut self) -> Self {
        self.labels_fail = true;
        self
    }

    fn log(&self) -> MutexGuard<'_, Vec<HostCall>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.log().clone()
    }

    pub fn comments(&self) -> Vec<String> {
        self.log()
            .iter()
            .filter_map(|c| match c {
                HostCall::CreateIssueComment { body, .. } => Some(body.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.log()
            .iter()
            .filter_map(|c| match c {
                HostCall::AddLabels { labels, .. } => Some(labels.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

#[async_trait]
impl RepositoryHost for MockHost {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get_pull_request(
        &self,
        _repo: &RepoCoordinates,
        number: u64,
    ) -> Result<PullRequest, HostError> {
        self.log().push(HostCall::GetPullRequest(number));
        if self.pull_fail {
            return Err(HostError::NotFound("mock pull request failure".into()));
        }
        Ok(PullRequest {
            author: self.author.clone(),
        })
    }

    async fn list_commits(
        &self,
        _repo: &RepoCoordinates,
        number: u64,
    ) -> Result<Vec<Commit>, HostError> {
        self.log().push(HostCall::ListCommits(number));
        if self.commits_fail {
            return Err(HostError::RateLimited("mock list commits failure".into()));
        }
        Ok(self.commits.clone())
    }

    async fn create_issue_comment(
        &self,
        _repo: &RepoCoordinates,
        issue_number: u64,
        body: &str,
    ) -> Result<(), HostError> {
        self.log().push(HostCall::CreateIssueComment {
            issue_number,
            body: body.to_string(),
        });
        if self.comment_fail {
            return Err(HostError::AuthFailed("mock comment failure".into()));
        }
        Ok(())
    }

    async fn add_labels(
        &self,
        _repo: &RepoCoordinates,
        issue_number: u64,
        labels: &[&str],
    ) -> Result<(), HostError> {
        self.log().push(HostCall::AddLabels {
            issue_number,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        });
        if self.labels_fail {
            return Err(HostError::AuthFailed("mock add labels failure".into()));
        }
        Ok(())
    }
}
