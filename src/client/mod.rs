//! Remote Data Client
//!
//! The select/insert contract against the `goals` and `posts` collections.
//! Views only ever talk to a [`DataClient`]; which store sits behind it is
//! decided by whoever builds the view.
//!
//! - [`HttpDataClient`]: the data-store REST API over reqwest
//! - [`StoreClient`]: the SQLite store in the same process
//!
//! # Wire shape
//!
//! Goal rows arrive with their relation counts as nested aggregate arrays:
//!
//! ```text
//! { "id": "...", "title": "...", ...,
//!   "posts": [{ "count": 4 }], "user_goals": [{ "count": 12 }] }
//! ```
//!
//! [`GoalRow::into_goal`] folds those into [`Goal::counts`].

#[cfg(feature = "server")]
mod http;
#[cfg(feature = "server")]
mod local;

#[cfg(feature = "server")]
pub use http::{HttpDataClient, RemoteConfig};
#[cfg(feature = "server")]
pub use local::StoreClient;

use crate::models::{Goal, GoalCounts, GoalOption, NewGoal, NewPost, Post};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Call-and-response access to the remote goal and post tables
#[async_trait]
pub trait DataClient: Send + Sync {
    /// All goals with post and participant counts, newest first
    async fn select_goals(&self) -> Result<Vec<GoalRow>, ClientError>;

    /// `{id, title}` of all goals, newest first
    async fn select_goal_options(&self) -> Result<Vec<GoalOption>, ClientError>;

    /// One goal with counts, `None` if the id is unknown
    async fn select_goal(&self, id: &str) -> Result<Option<GoalRow>, ClientError>;

    /// Posts attached to a goal, newest first
    async fn select_posts(&self, goal_id: &str) -> Result<Vec<PostRow>, ClientError>;

    /// Insert exactly `{title, description, category}`
    async fn insert_goal(&self, goal: &NewGoal) -> Result<(), ClientError>;

    /// Insert exactly `{goal_id, content, media_url}`
    async fn insert_post(&self, post: &NewPost) -> Result<(), ClientError>;

    /// Link a user to a goal as participant (idempotent)
    async fn insert_participant(&self, goal_id: &str, user_id: &str) -> Result<(), ClientError>;
}

/// Single-row count aggregate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountAggregate {
    pub count: u64,
}

/// A goal row as delivered by the data store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub posts: Vec<CountAggregate>,
    #[serde(default)]
    pub user_goals: Vec<CountAggregate>,
}

impl GoalRow {
    /// Fold the nested aggregates into a [`Goal`]
    ///
    /// Counts come from the first element of each aggregate. An empty
    /// aggregate leaves the count absent rather than failing the row.
    pub fn into_goal(self) -> Goal {
        let counts = GoalCounts {
            posts: self.posts.first().map(|a| a.count),
            participants: self.user_goals.first().map(|a| a.count),
        };

        if counts.posts.is_none() || counts.participants.is_none() {
            tracing::warn!(goal_id = %self.id, "Goal row is missing a count aggregate");
        }

        Goal {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            created_at: self.created_at,
            image_url: None,
            difficulty: None,
            counts,
        }
    }
}

/// A post row as delivered by the data store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostRow {
    pub id: String,
    pub goal_id: String,
    pub content: String,
    #[serde(default)]
    pub media_url: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PostRow {
    pub fn into_post(self) -> Post {
        let mut post = Post::new(self.id, self.content).goal(self.goal_id);
        post.media_urls = self.media_url;
        post.created_at = self.created_at;
        post
    }
}

/// Errors surfaced by a [`DataClient`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Data store unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Store error: {0}")]
    Store(String),
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory client that records inserts

    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingClient {
        pub goals: Vec<GoalRow>,
        pub options: Vec<GoalOption>,
        pub fail_with: Option<ClientError>,
        pub inserted_goals: Mutex<Vec<NewGoal>>,
        pub inserted_posts: Mutex<Vec<NewPost>>,
    }

    impl RecordingClient {
        pub fn failing(error: ClientError) -> Self {
            Self {
                fail_with: Some(error),
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), ClientError> {
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        pub fn goal_inserts(&self) -> Vec<NewGoal> {
            self.inserted_goals.lock().unwrap().clone()
        }

        pub fn post_inserts(&self) -> Vec<NewPost> {
            self.inserted_posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DataClient for RecordingClient {
        async fn select_goals(&self) -> Result<Vec<GoalRow>, ClientError> {
            self.check()?;
            Ok(self.goals.clone())
        }

        async fn select_goal_options(&self) -> Result<Vec<GoalOption>, ClientError> {
            self.check()?;
            Ok(self.options.clone())
        }

        async fn select_goal(&self, id: &str) -> Result<Option<GoalRow>, ClientError> {
            self.check()?;
            Ok(self.goals.iter().find(|g| g.id == id).cloned())
        }

        async fn select_posts(&self, _goal_id: &str) -> Result<Vec<PostRow>, ClientError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn insert_goal(&self, goal: &NewGoal) -> Result<(), ClientError> {
            self.check()?;
            self.inserted_goals.lock().unwrap().push(goal.clone());
            Ok(())
        }

        async fn insert_post(&self, post: &NewPost) -> Result<(), ClientError> {
            self.check()?;
            self.inserted_posts.lock().unwrap().push(post.clone());
            Ok(())
        }

        async fn insert_participant(&self, _goal_id: &str, _user_id: &str) -> Result<(), ClientError> {
            self.check()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(posts: Vec<CountAggregate>, user_goals: Vec<CountAggregate>) -> GoalRow {
        GoalRow {
            id: "g1".to_string(),
            title: "Run a 5K".to_string(),
            description: "Train for 8 weeks".to_string(),
            category: "Fitness".to_string(),
            created_at: None,
            posts,
            user_goals,
        }
    }

    #[test]
    fn test_into_goal_uses_first_aggregate() {
        let goal = row(
            vec![CountAggregate { count: 4 }],
            vec![CountAggregate { count: 12 }, CountAggregate { count: 99 }],
        )
        .into_goal();

        assert_eq!(goal.counts.posts, Some(4));
        assert_eq!(goal.counts.participants, Some(12));
    }

    #[test]
    fn test_into_goal_missing_aggregate_is_absent() {
        let goal = row(Vec::new(), vec![CountAggregate { count: 1 }]).into_goal();

        assert_eq!(goal.counts.posts, None);
        assert_eq!(goal.counts.participants, Some(1));
    }

    #[test]
    fn test_goal_row_decodes_nested_counts() {
        let json = r#"{
            "id": "g1", "title": "t", "description": "d", "category": "Career",
            "created_at": "2024-05-01T10:00:00Z",
            "posts": [{"count": 2}], "user_goals": [{"count": 0}]
        }"#;
        let row: GoalRow = serde_json::from_str(json).unwrap();
        let goal = row.into_goal();

        assert_eq!(goal.counts.posts, Some(2));
        assert_eq!(goal.counts.participants, Some(0));
        assert!(goal.created_at.is_some());
    }

    #[test]
    fn test_post_row_into_post() {
        let post = PostRow {
            id: "p1".to_string(),
            goal_id: "g1".to_string(),
            content: "Day one".to_string(),
            media_url: vec!["a.jpg".to_string()],
            created_at: None,
        }
        .into_post();

        assert_eq!(post.goal_id.as_deref(), Some("g1"));
        assert_eq!(post.cover(), Some("a.jpg"));
        assert!(post.author.is_none());
    }
}
