//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{Goal, Post};

// ============================================
// GOAL / POST DTOs
// ============================================

/// Goal insert request, exactly the three user-entered fields
#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub description: String,
    /// One of Fitness, Learning, Career, Personal
    pub category: String,
}

/// Post insert request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub goal_id: String,
    pub content: String,
    #[serde(default)]
    pub media_url: Vec<String>,
}

/// Participant link request
#[derive(Debug, Deserialize)]
pub struct ParticipantRequest {
    pub user_id: String,
}

/// Participant link response
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub goal_id: String,
    pub user_id: String,
    /// False when the link already existed
    pub created: bool,
}

// ============================================
// CATALOG DTOs
// ============================================

/// Connect feed sample data
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub trending_goals: Vec<Goal>,
    pub posts: Vec<Post>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    pub goals: u64,
    pub posts: u64,
    pub participants: u64,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
