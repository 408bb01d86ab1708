//! Catalog Routes
//!
//! Read-only sample data for the views that are not backed by the store.

use axum::Json;

use crate::api::dto::FeedResponse;
use crate::catalog;
use crate::models::{Analytics, Channel, Post, Profile, Short};

/// GET /api/v1/catalog/shorts
pub async fn shorts() -> Json<Vec<Short>> {
    Json(catalog::sample_shorts())
}

/// GET /api/v1/catalog/channels
pub async fn channels() -> Json<Vec<Channel>> {
    Json(catalog::sample_channels())
}

/// GET /api/v1/catalog/feed
pub async fn feed() -> Json<FeedResponse> {
    Json(FeedResponse {
        trending_goals: catalog::trending_goals(),
        posts: catalog::community_posts(),
    })
}

/// GET /api/v1/catalog/content
pub async fn content() -> Json<Vec<Post>> {
    Json(catalog::content_posts())
}

/// GET /api/v1/catalog/profile
pub async fn profile() -> Json<Profile> {
    Json(catalog::sample_profile())
}

/// GET /api/v1/catalog/analytics
pub async fn analytics() -> Json<Analytics> {
    Json(catalog::sample_analytics())
}
