//! REST client for the hosted data store
//!
//! Speaks the row-level API exposed by `aspiration-hub` (or any service with
//! the same shape). The optional API key goes out both as an `apikey` header
//! and as a bearer token.

use super::{ClientError, DataClient, GoalRow, PostRow};
use crate::models::{GoalOption, NewGoal, NewPost};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Connection settings for the remote data store
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL, e.g. "http://localhost:8090"
    pub url: String,
    /// Anonymous access key, sent on every request when set
    pub api_key: Option<String>,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8090".to_string(),
            api_key: None,
            request_timeout_ms: 5000,
        }
    }
}

/// [`DataClient`] over HTTP
pub struct HttpDataClient {
    client: Client,
    config: RemoteConfig,
}

impl HttpDataClient {
    pub fn new(config: RemoteConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Check that the store answers its liveness probe
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.send(self.client.get(self.url("/health/live"))).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Unavailable)
        }
    }

    /// Full health document from `/health`
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json(self.url("/health")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.url.trim_end_matches('/'), path)
    }

    fn goal_url(&self, id: &str, suffix: &str) -> String {
        self.url(&format!(
            "/api/v1/goals/{}{}",
            urlencoding::encode(id),
            suffix
        ))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = match &self.config.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        };

        request.send().await.map_err(map_send_error)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        let response = self.send(self.client.get(&url)).await?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, url: String, body: &B) -> Result<(), ClientError> {
        let response = self.send(self.client.post(&url).json(body)).await?;
        check_status(response).await?;
        Ok(())
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_connect() {
        ClientError::Unavailable
    } else {
        ClientError::Request(e.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&text),
    })
}

/// Pull `error.message` out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl DataClient for HttpDataClient {
    async fn select_goals(&self) -> Result<Vec<GoalRow>, ClientError> {
        self.get_json(self.url("/api/v1/goals")).await
    }

    async fn select_goal_options(&self) -> Result<Vec<GoalOption>, ClientError> {
        self.get_json(self.url("/api/v1/goals/options")).await
    }

    async fn select_goal(&self, id: &str) -> Result<Option<GoalRow>, ClientError> {
        match self.get_json(self.goal_url(id, "")).await {
            Ok(row) => Ok(Some(row)),
            Err(ClientError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn select_posts(&self, goal_id: &str) -> Result<Vec<PostRow>, ClientError> {
        self.get_json(self.goal_url(goal_id, "/posts")).await
    }

    async fn insert_goal(&self, goal: &NewGoal) -> Result<(), ClientError> {
        self.post_json(self.url("/api/v1/goals"), goal).await
    }

    async fn insert_post(&self, post: &NewPost) -> Result<(), ClientError> {
        self.post_json(self.url("/api/v1/posts"), post).await
    }

    async fn insert_participant(&self, goal_id: &str, user_id: &str) -> Result<(), ClientError> {
        let body = serde_json::json!({ "user_id": user_id });
        self.post_json(self.goal_url(goal_id, "/participants"), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_and_encode() {
        let client = HttpDataClient::new(RemoteConfig {
            url: "http://store.local/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(client.url("/api/v1/goals"), "http://store.local/api/v1/goals");
        assert_eq!(
            client.goal_url("a b/c", "/posts"),
            "http://store.local/api/v1/goals/a%20b%2Fc/posts"
        );
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"Goal not found: g1"},"request_id":"x"}"#;
        assert_eq!(error_message(body), "Goal not found: g1");
        assert_eq!(error_message("bad gateway"), "bad gateway");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_unavailable() {
        // Port 9 (discard) is closed on test machines
        let client = HttpDataClient::new(RemoteConfig {
            url: "http://127.0.0.1:9".to_string(),
            api_key: Some("anon".to_string()),
            request_timeout_ms: 2000,
        })
        .unwrap();

        let err = client.select_goals().await.unwrap_err();
        assert!(matches!(err, ClientError::Unavailable | ClientError::Timeout));
    }

    mod live {
        use super::*;
        use crate::api::{build_router, AppState};
        use crate::config::ApiConfig;
        use crate::models::Category;
        use crate::store::GoalStore;
        use crate::views::{CreateForm, GoalListing, Route, SubmitOutcome};
        use std::sync::Arc;
        use tempfile::tempdir;

        /// Serve a fresh store on an ephemeral port and return its base URL
        async fn spawn_service(api_key: Option<&str>) -> (String, Arc<GoalStore>, tempfile::TempDir) {
            let dir = tempdir().unwrap();
            let store = Arc::new(GoalStore::open(dir.path()).unwrap());
            let config = ApiConfig {
                api_key: api_key.map(str::to_string),
                ..Default::default()
            };
            let router = build_router(AppState::new(Arc::clone(&store), config));

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });

            (format!("http://{}", addr), store, dir)
        }

        fn client(url: &str, api_key: Option<&str>) -> HttpDataClient {
            HttpDataClient::new(RemoteConfig {
                url: url.to_string(),
                api_key: api_key.map(str::to_string),
                request_timeout_ms: 5000,
            })
            .unwrap()
        }

        #[tokio::test]
        async fn test_forms_and_listing_over_http() {
            let (url, store, _dir) = spawn_service(None).await;
            let client = client(&url, None);

            let mut form = CreateForm::new();
            form.toggle_mode();
            form.set_title("Run a 5K");
            form.set_description("Train for 8 weeks");
            form.set_category(Some(Category::Fitness));
            assert_eq!(form.submit(&client).await, SubmitOutcome::Navigate(Route::Goals));

            let mut listing = GoalListing::new();
            listing.load(&client).await;
            assert!(!listing.is_loading());
            assert!(listing.error().is_none());
            assert_eq!(listing.goals().len(), 1);
            let goal_id = listing.goals()[0].id.clone();
            assert_eq!(listing.goals()[0].category, "Fitness");
            assert_eq!(listing.goals()[0].counts.posts, Some(0));

            let mut form = CreateForm::new();
            form.load_goal_options(&client).await;
            form.select_goal(&goal_id).unwrap();
            form.set_content("Week one done");
            form.add_media_url("https://img.example/1.jpg");
            assert_eq!(
                form.submit(&client).await,
                SubmitOutcome::Navigate(Route::goal(goal_id.clone()))
            );

            let posts = client.select_posts(&goal_id).await.unwrap();
            assert_eq!(posts.len(), 1);
            assert_eq!(posts[0].media_url, vec!["https://img.example/1.jpg".to_string()]);

            client.insert_participant(&goal_id, "u1").await.unwrap();
            let row = client.select_goal(&goal_id).await.unwrap().unwrap().into_goal();
            assert_eq!(row.counts.posts, Some(1));
            assert_eq!(row.counts.participants, Some(1));

            assert_eq!(client.select_goal("missing").await.unwrap(), None);
            assert_eq!(store.stats().unwrap().posts, 1);
        }

        #[tokio::test]
        async fn test_insert_post_for_unknown_goal_is_not_found() {
            let (url, _store, _dir) = spawn_service(None).await;
            let client = client(&url, None);

            let post = NewPost {
                goal_id: "missing".to_string(),
                content: "hello".to_string(),
                media_url: Vec::new(),
            };
            let err = client.insert_post(&post).await.unwrap_err();
            assert!(matches!(err, ClientError::Api { status: 404, .. }));
        }

        #[tokio::test]
        async fn test_api_key_over_http() {
            let (url, _store, _dir) = spawn_service(Some("anon-key")).await;

            let mut listing = GoalListing::new();
            listing.load(&client(&url, None)).await;
            assert!(matches!(
                listing.error(),
                Some(ClientError::Api { status: 401, .. })
            ));
            assert!(listing.goals().is_empty());

            let keyed = client(&url, Some("anon-key"));
            let mut form = CreateForm::new();
            form.toggle_mode();
            form.set_title("Learn Spanish");
            form.set_description("Daily practice");
            form.set_category(Some(Category::Learning));
            assert_eq!(form.submit(&keyed).await, SubmitOutcome::Navigate(Route::Goals));

            let mut listing = GoalListing::new();
            listing.load(&keyed).await;
            assert_eq!(listing.goals().len(), 1);

            let wrong = client(&url, Some("nope"));
            let mut form = CreateForm::new();
            form.toggle_mode();
            form.set_title("t");
            form.set_description("d");
            form.set_category(Some(Category::Career));
            assert!(matches!(form.submit(&wrong).await, SubmitOutcome::Failed(_)));
            assert_eq!(form.goal_draft().title, "t");
        }
    }
}
