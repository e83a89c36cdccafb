//! The workflow event that triggered this run.

use std::path::Path;

use serde::Deserialize;
use signoff_core::{PullRequestContext, RepoCoordinates, SignoffError};

pub const NOT_A_PULL_REQUEST: &str =
    "This action only runs against pull request events. Try modifying your workflow trigger.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    pub user: PayloadUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayloadUser {
    pub login: String,
}

#[derive(Debug, Clone)]
pub struct TriggerEvent {
    pub name: Option<String>,
    pub repo: RepoCoordinates,
    pub payload: EventPayload,
}

impl TriggerEvent {
    pub fn from_json(
        repository: &str,
        name: Option<String>,
        json: &str,
    ) -> Result<Self, SignoffError> {
        let repo = repository
            .parse::<RepoCoordinates>()
            .map_err(|e| SignoffError::Configuration(e.to_string()))?;
        let payload: EventPayload = serde_json::from_str(json)
            .map_err(|e| SignoffError::Configuration(format!("parse event payload: {e}")))?;
        Ok(Self {
            name,
            repo,
            payload,
        })
    }

    pub fn from_path(
        repository: &str,
        name: Option<String>,
        path: &Path,
    ) -> Result<Self, SignoffError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SignoffError::Configuration(format!("read event file {}: {e}", path.display()))
        })?;
        Self::from_json(repository, name, &json)
    }

    /// Fails with a configuration error unless the payload carries a pull request.
    pub fn pull_request_context(&self) -> Result<PullRequestContext, SignoffError> {
        let pr = self
            .payload
            .pull_request
            .as_ref()
            .ok_or_else(|| SignoffError::Configuration(NOT_A_PULL_REQUEST.into()))?;
        Ok(PullRequestContext {
            repo: self.repo.clone(),
            number: pr.number,
            author: pr.user.login.clone(),
        })
    }
}
