//! AspirationHub Data-Store API
//!
//! HTTP layer over the goal store, built with Axum. This is the remote
//! data boundary the views and `hub-cli` talk to.
//!
//! # Endpoints
//!
//! ## Goals
//! - `GET /api/v1/goals` - Goals with nested `posts`/`user_goals` counts
//! - `POST /api/v1/goals` - Insert `{title, description, category}`
//! - `GET /api/v1/goals/options` - `{id, title}` pairs
//! - `GET /api/v1/goals/:id` - One goal
//! - `GET /api/v1/goals/:id/posts` - Posts of a goal
//! - `POST /api/v1/goals/:id/participants` - Participant link
//!
//! ## Posts
//! - `POST /api/v1/posts` - Insert `{goal_id, content, media_url}`
//!
//! ## Catalog
//! - `GET /api/v1/catalog/{shorts,channels,feed,content,profile,analytics}`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! When an API key is configured every `/api/v1` request must carry it in
//! the `apikey` header or as `Authorization: Bearer <key>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use aspiration_hub::api::{serve, AppState};
//! use aspiration_hub::config::ApiConfig;
//! use aspiration_hub::store::GoalStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(GoalStore::open("./data")?);
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use extract::ApiJson;
pub use state::AppState;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    let api_routes = Router::new()
        // Goal routes
        .route(
            "/goals",
            get(routes::goals::list_goals).post(routes::goals::create_goal),
        )
        .route("/goals/options", get(routes::goals::goal_options))
        .route("/goals/:id", get(routes::goals::get_goal))
        .route("/goals/:id/posts", get(routes::goals::goal_posts))
        .route(
            "/goals/:id/participants",
            post(routes::goals::add_participant),
        )
        // Post routes
        .route("/posts", post(routes::posts::create_post))
        // Catalog routes
        .route("/catalog/shorts", get(routes::catalog::shorts))
        .route("/catalog/channels", get(routes::catalog::channels))
        .route("/catalog/feed", get(routes::catalog::feed))
        .route("/catalog/content", get(routes::catalog::content))
        .route("/catalog/profile", get(routes::catalog::profile))
        .route("/catalog/analytics", get(routes::catalog::analytics))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&shared_state),
            require_api_key,
        ));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&shared_state.config.cors_origins);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Reject `/api/v1` requests without the configured key
async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.config.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    match presented_key(request.headers()) {
        Some(key) if key == expected => {}
        Some(_) => return Err(ApiError::Unauthorized("invalid API key".to_string())),
        None => return Err(ApiError::Unauthorized("missing API key".to_string())),
    }

    Ok(next.run(request).await)
}

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(key) = headers.get("apikey").and_then(|v| v.to_str().ok()) {
        return Some(key);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("AspirationHub API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("AspirationHub API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
