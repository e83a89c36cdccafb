//! In-process fake of the GitHub REST endpoints a sign-off check touches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Default)]
pub struct FakeState {
    pub author: String,
    /// (sha, message) pairs, in listing order.
    pub commits: Vec<(String, String)>,
    pub comments: Vec<(u64, String)>,
    pub labels: Vec<(u64, Vec<String>)>,
    pub commit_pages_served: Vec<u32>,
    pub auth_headers: Vec<String>,
    pub fail_commits_with: Option<StatusCode>,
    pub rate_limit_exhausted: bool,
    pub fail_comments_with: Option<StatusCode>,
}

pub type Shared = Arc<Mutex<FakeState>>;

pub struct FakeGitHub {
    pub base_url: String,
    pub state: Shared,
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeGitHub {
    pub fn comments(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().comments.clone()
    }

    pub fn labels(&self) -> Vec<(u64, Vec<String>)> {
        self.state.lock().unwrap().labels.clone()
    }
}

pub fn sha(i: usize) -> String {
    format!("{i:040x}")
}

pub async fn spawn_fake_github(author: &str, commits: Vec<(String, String)>) -> FakeGitHub {
    let state: Shared = Arc::new(Mutex::new(FakeState {
        author: author.to_string(),
        commits,
        ..Default::default()
    }));

    let app = Router::new()
        .route("/repos/{owner}/{repo}/pulls/{number}", get(get_pull))
        .route("/repos/{owner}/{repo}/pulls/{number}/commits", get(list_commits))
        .route(
            "/repos/{owner}/{repo}/issues/{number}/comments",
            post(create_comment),
        )
        .route("/repos/{owner}/{repo}/issues/{number}/labels", post(add_labels))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeGitHub {
        base_url: format!("http://{addr}"),
        state,
        _handle: handle,
    }
}

fn record_auth(state: &mut FakeState, headers: &HeaderMap) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.auth_headers.push(auth);
}

async fn get_pull(
    State(state): State<Shared>,
    Path((owner, repo, number)): Path<(String, String, u64)>,
    headers: HeaderMap,
) -> Json<Value> {
    let mut s = state.lock().unwrap();
    record_auth(&mut s, &headers);
    Json(json!({
        "number": number,
        "title": "Add widgets",
        "html_url": format!("https://github.com/{owner}/{repo}/pull/{number}"),
        "user": { "login": s.author },
    }))
}

async fn list_commits(
    State(state): State<Shared>,
    Path((owner, repo, _number)): Path<(String, String, u64)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    record_auth(&mut s, &headers);

    if let Some(status) = s.fail_commits_with {
        let mut resp = (status, Json(json!({ "message": "API rate limit exceeded" })))
            .into_response();
        if s.rate_limit_exhausted {
            resp.headers_mut()
                .insert("x-ratelimit-remaining", "0".parse().unwrap());
        }
        return resp;
    }

    let per_page: usize = params
        .get("per_page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);
    let page: u32 = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    s.commit_pages_served.push(page);

    let start = (page as usize - 1) * per_page;
    let items: Vec<Value> = s
        .commits
        .iter()
        .skip(start)
        .take(per_page)
        .map(|(sha, message)| {
            json!({
                "sha": sha,
                "html_url": format!("https://github.com/{owner}/{repo}/commit/{sha}"),
                "commit": {
                    "message": message,
                    "author": { "name": "Jane Doe", "email": "jane@example.com" },
                },
            })
        })
        .collect();
    Json(Value::Array(items)).into_response()
}

async fn create_comment(
    State(state): State<Shared>,
    Path((_owner, _repo, number)): Path<(String, String, u64)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut s = state.lock().unwrap();
    if let Some(status) = s.fail_comments_with {
        return (
            status,
            Json(json!({ "message": "Resource not accessible by integration" })),
        );
    }
    let text = body["body"].as_str().unwrap_or_default().to_string();
    s.comments.push((number, text.clone()));
    (StatusCode::CREATED, Json(json!({ "id": 1, "body": text })))
}

async fn add_labels(
    State(state): State<Shared>,
    Path((_owner, _repo, number)): Path<(String, String, u64)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let labels: Vec<String> = body["labels"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default();
    let echoed: Vec<Value> = labels.iter().map(|l| json!({ "name": l })).collect();
    state.lock().unwrap().labels.push((number, labels));
    Json(Value::Array(echoed))
}
