use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use signoff_core::{Commit, RepoCoordinates};
use tracing::{debug, info};

use super::{HostError, PullRequest, RepositoryHost};

/// GitHub's maximum page size for list endpoints.
const PER_PAGE: usize = 100;
/// The pull request commits listing stops at 250 entries.
const MAX_PAGES: u32 = 3;

/// GitHub REST API client scoped to the four calls a sign-off check needs.
#[derive(Debug)]
pub struct GitHubHost {
    /// API root, e.g. "https://api.github.com" or "https://ghe.example.com/api/v3".
    base_url: String,
    client: Client,
}

impl GitHubHost {
    pub fn new(api_url: &str, token: &str, timeout: Duration) -> Result<Self, HostError> {
        let base_url = api_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| HostError::Request(format!("invalid API URL {api_url}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| HostError::AuthFailed(format!("token is not a valid header: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent("signoff-action")
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| HostError::Request(format!("HTTP client init: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn repo_url(&self, repo: &RepoCoordinates, path: &str) -> String {
        format!("{}/repos/{}/{}{path}", self.base_url, repo.owner, repo.name)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, HostError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| HostError::Request(e.to_string()))?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let remaining = resp
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.text().await.unwrap_or_default();
        Err(classify_failure(status, remaining.as_deref(), body))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, HostError> {
        let resp = self.send(self.client.get(url)).await?;
        resp.json()
            .await
            .map_err(|e| HostError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + Send + Sync>(
        &self,
        url: String,
        body: &B,
    ) -> Result<(), HostError> {
        self.send(self.client.post(url).json(body)).await?;
        Ok(())
    }
}

/// Map a non-success response to the matching [`HostError`].
fn classify_failure(
    status: StatusCode,
    ratelimit_remaining: Option<&str>,
    body: String,
) -> HostError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => HostError::RateLimited(body),
        StatusCode::FORBIDDEN if ratelimit_remaining == Some("0") => HostError::RateLimited(body),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HostError::AuthFailed(body),
        StatusCode::NOT_FOUND => HostError::NotFound(body),
        _ => HostError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl RepositoryHost for GitHubHost {
    fn name(&self) -> &str {
        "github"
    }

    async fn get_pull_request(
        &self,
        repo: &RepoCoordinates,
        number: u64,
    ) -> Result<PullRequest, HostError> {
        let pr: GhPull = self
            .get_json(self.repo_url(repo, &format!("/pulls/{number}")))
            .await?;
        debug!("fetched PR #{number} by {}", pr.user.login);
        Ok(PullRequest {
            author: pr.user.login,
        })
    }

    async fn list_commits(
        &self,
        repo: &RepoCoordinates,
        number: u64,
    ) -> Result<Vec<Commit>, HostError> {
        let mut commits = Vec::new();
        for page in 1..=MAX_PAGES {
            let url = self.repo_url(
                repo,
                &format!("/pulls/{number}/commits?per_page={PER_PAGE}&page={page}"),
            );
            let batch: Vec<GhCommit> = self.get_json(url).await?;
            let last = batch.len() < PER_PAGE;
            commits.extend(batch.into_iter().map(Commit::from));
            if last {
                break;
            }
        }
        debug!("listed {} commits on PR #{number}", commits.len());
        Ok(commits)
    }

    async fn create_issue_comment(
        &self,
        repo: &RepoCoordinates,
        issue_number: u64,
        body: &str,
    ) -> Result<(), HostError> {
        #[derive(Serialize)]
        struct CommentBody<'a> {
            body: &'a str,
        }

        self.post_json(
            self.repo_url(repo, &format!("/issues/{issue_number}/comments")),
            &CommentBody { body },
        )
        .await?;
        info!("commented on {repo}#{issue_number}");
        Ok(())
    }

    async fn add_labels(
        &self,
        repo: &RepoCoordinates,
        issue_number: u64,
        labels: &[&str],
    ) -> Result<(), HostError> {
        #[derive(Serialize)]
        struct LabelsBody<'a> {
            labels: &'a [&'a str],
        }

        self.post_json(
            self.repo_url(repo, &format!("/issues/{issue_number}/labels")),
            &LabelsBody { labels },
        )
        .await?;
        info!("labeled {repo}#{issue_number}: {}", labels.join(", "));
        Ok(())
    }
}

// GitHub API response structs

#[derive(Deserialize)]
struct GhUser {
    login: String,
}

#[derive(Deserialize)]
struct GhPull {
    user: GhUser,
}

#[derive(Deserialize)]
struct GhCommitDetail {
    message: String,
}

#[derive(Deserialize)]
struct GhCommit {
    sha: String,
    html_url: String,
    commit: GhCommitDetail,
}

impl From<GhCommit> for Commit {
    fn from(c: GhCommit) -> Self {
        Commit {
            sha: c.sha,
            message: c.commit.message,
            url: c.html_url,
        }
    }
}
