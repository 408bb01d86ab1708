//! Goal Routes
//!
//! - GET /api/v1/goals - Goals with nested post/participant counts, newest first
//! - POST /api/v1/goals - Insert a goal
//! - GET /api/v1/goals/options - `{id, title}` pairs for the post form
//! - GET /api/v1/goals/:id - One goal with counts
//! - GET /api/v1/goals/:id/posts - Posts of a goal, newest first
//! - POST /api/v1/goals/:id/participants - Link a user to a goal

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateGoalRequest, ParticipantRequest, ParticipantResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::client::{GoalRow, PostRow};
use crate::models::{Category, GoalOption, NewGoal};

/// GET /api/v1/goals
pub async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GoalRow>>> {
    let goals = state.store.list_goals()?;
    Ok(Json(goals.into_iter().map(|g| g.into_row()).collect()))
}

/// GET /api/v1/goals/options
pub async fn goal_options(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalOption>>> {
    Ok(Json(state.store.goal_options()?))
}

/// GET /api/v1/goals/:id
pub async fn get_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GoalRow>> {
    let goal = state
        .store
        .get_goal(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("Goal {} not found", id)))?;

    Ok(Json(goal.into_row()))
}

/// POST /api/v1/goals
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateGoalRequest>,
) -> ApiResult<(StatusCode, Json<GoalRow>)> {
    let category: Category = req
        .category
        .parse()
        .map_err(|e: crate::models::UnknownCategory| ApiError::Validation(e.to_string()))?;

    let goal = NewGoal {
        title: req.title,
        description: req.description,
        category,
    };

    let record = state.store.insert_goal(&goal)?;

    Ok((StatusCode::CREATED, Json(record.into_row())))
}

/// GET /api/v1/goals/:id/posts
pub async fn goal_posts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<PostRow>>> {
    let posts = state.store.posts_for_goal(&id)?;
    Ok(Json(posts.into_iter().map(|p| p.into_row()).collect()))
}

/// POST /api/v1/goals/:id/participants
pub async fn add_participant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ParticipantRequest>,
) -> ApiResult<(StatusCode, Json<ParticipantResponse>)> {
    let created = state.store.add_participant(&id, &req.user_id)?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ParticipantResponse {
            goal_id: id,
            user_id: req.user_id,
            created,
        }),
    ))
}
