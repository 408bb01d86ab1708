//! Post Routes
//!
//! - POST /api/v1/posts - Insert a post for an existing goal

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::CreatePostRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::client::PostRow;
use crate::models::NewPost;

/// POST /api/v1/posts
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostRow>)> {
    if req.goal_id.trim().is_empty() {
        return Err(ApiError::Validation("goal_id is required".to_string()));
    }
    if let Some(i) = req.media_url.iter().position(|u| u.trim().is_empty()) {
        return Err(ApiError::Validation(format!("media_url[{}] is blank", i)));
    }

    let post = NewPost {
        goal_id: req.goal_id,
        content: req.content,
        media_url: req.media_url,
    };

    let record = state.store.insert_post(&post)?;

    Ok((StatusCode::CREATED, Json(record.into_row())))
}
