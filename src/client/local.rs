//! In-process client over the SQLite store

use super::{ClientError, DataClient, GoalRow, PostRow};
use crate::models::{GoalOption, NewGoal, NewPost};
use crate::store::{GoalStore, StoreError};
use async_trait::async_trait;
use std::sync::Arc;

/// [`DataClient`] backed directly by a [`GoalStore`]
#[derive(Clone)]
pub struct StoreClient {
    store: Arc<GoalStore>,
}

impl StoreClient {
    pub fn new(store: Arc<GoalStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &GoalStore {
        &self.store
    }
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::GoalNotFound(_) => ClientError::Api {
                status: 404,
                message: err.to_string(),
            },
            StoreError::Invalid(_) => ClientError::Api {
                status: 400,
                message: err.to_string(),
            },
            other => ClientError::Store(other.to_string()),
        }
    }
}

#[async_trait]
impl DataClient for StoreClient {
    async fn select_goals(&self) -> Result<Vec<GoalRow>, ClientError> {
        let goals = self.store.list_goals()?;
        Ok(goals.into_iter().map(|g| g.into_row()).collect())
    }

    async fn select_goal_options(&self) -> Result<Vec<GoalOption>, ClientError> {
        Ok(self.store.goal_options()?)
    }

    async fn select_goal(&self, id: &str) -> Result<Option<GoalRow>, ClientError> {
        Ok(self.store.get_goal(id)?.map(|g| g.into_row()))
    }

    async fn select_posts(&self, goal_id: &str) -> Result<Vec<PostRow>, ClientError> {
        let posts = self.store.posts_for_goal(goal_id)?;
        Ok(posts.into_iter().map(|p| p.into_row()).collect())
    }

    async fn insert_goal(&self, goal: &NewGoal) -> Result<(), ClientError> {
        self.store.insert_goal(goal)?;
        Ok(())
    }

    async fn insert_post(&self, post: &NewPost) -> Result<(), ClientError> {
        self.store.insert_post(post)?;
        Ok(())
    }

    async fn insert_participant(&self, goal_id: &str, user_id: &str) -> Result<(), ClientError> {
        self.store.add_participant(goal_id, user_id)?;
        Ok(())
    }
}
