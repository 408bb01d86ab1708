//! HTTP API Client
//!
//! Select/insert calls against the data store. Rows come back in the shared
//! wire shapes so the view state in `aspiration_hub::views` can consume them
//! unchanged.

use aspiration_hub::client::{ClientError, GoalRow, PostRow};
use aspiration_hub::models::{GoalOption, NewGoal, NewPost};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Default data-store URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090";

const API_URL_KEY: &str = "aspiration_api_url";
const API_KEY_KEY: &str = "aspiration_api_key";

fn local_item(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(key)
        .ok()
        .flatten()
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_item(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

fn with_key(request: RequestBuilder) -> RequestBuilder {
    match local_item(API_KEY_KEY).filter(|k| !k.is_empty()) {
        Some(key) => request
            .header("apikey", &key)
            .header("Authorization", &format!("Bearer {}", key)),
        None => request,
    }
}

fn network_error(e: gloo_net::Error) -> ClientError {
    match e {
        gloo_net::Error::JsError(_) => ClientError::Unavailable,
        other => ClientError::Request(other.to_string()),
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap_or_default();
    let message = body
        .pointer("/error/message")
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown error")
        .to_string();

    Err(ClientError::Api { status, message })
}

fn log_failure(what: &str, err: &ClientError) {
    web_sys::console::error_1(&format!("{} failed: {}", what, err).into());
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ClientError> {
    let url = format!("{}{}", get_api_base(), path);

    let result = async {
        let response = with_key(Request::get(&url))
            .send()
            .await
            .map_err(network_error)?;
        let response = check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
    .await;

    if let Err(e) = &result {
        log_failure(&format!("GET {}", path), e);
    }
    result
}

async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<(), ClientError> {
    let url = format!("{}{}", get_api_base(), path);

    let result = async {
        let response = with_key(Request::post(&url))
            .json(body)
            .map_err(|e| ClientError::Request(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        check(response).await.map(|_| ())
    }
    .await;

    if let Err(e) = &result {
        log_failure(&format!("POST {}", path), e);
    }
    result
}

// ============ Selects ============

/// All goals with nested counts, newest first
pub async fn fetch_goals() -> Result<Vec<GoalRow>, ClientError> {
    get_json("/api/v1/goals").await
}

/// `{id, title}` choices for the post form
pub async fn fetch_goal_options() -> Result<Vec<GoalOption>, ClientError> {
    get_json("/api/v1/goals/options").await
}

/// One goal, `None` when the store does not know the id
pub async fn fetch_goal(id: &str) -> Result<Option<GoalRow>, ClientError> {
    match get_json(&format!("/api/v1/goals/{}", encode(id))).await {
        Ok(row) => Ok(Some(row)),
        Err(ClientError::Api { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn fetch_posts(goal_id: &str) -> Result<Vec<PostRow>, ClientError> {
    get_json(&format!("/api/v1/goals/{}/posts", encode(goal_id))).await
}

// ============ Inserts ============

pub async fn insert_goal(goal: &NewGoal) -> Result<(), ClientError> {
    post_json("/api/v1/goals", goal).await
}

pub async fn insert_post(post: &NewPost) -> Result<(), ClientError> {
    post_json("/api/v1/posts", post).await
}

fn encode(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}
