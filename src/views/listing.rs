//! Goal listing fetch state

use crate::client::{ClientError, DataClient, GoalRow};
use crate::models::Goal;

/// Goals shown on the goal listing view
#[derive(Debug, Clone, PartialEq)]
pub struct GoalListing {
    goals: Vec<Goal>,
    loading: bool,
    error: Option<ClientError>,
}

impl Default for GoalListing {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalListing {
    /// A listing whose first fetch is about to start
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. Loading is cleared either way.
    pub fn finish(&mut self, result: Result<Vec<GoalRow>, ClientError>) {
        self.loading = false;

        match result {
            Ok(rows) => {
                self.goals = rows.into_iter().map(GoalRow::into_goal).collect();
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch goals");
                self.goals.clear();
                self.error = Some(e);
            }
        }
    }

    pub async fn load<C: DataClient + ?Sized>(&mut self, client: &C) {
        self.begin();
        let result = client.select_goals().await;
        self.finish(result);
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::RecordingClient;
    use crate::client::CountAggregate;

    fn row(id: &str) -> GoalRow {
        GoalRow {
            id: id.to_string(),
            title: format!("goal {}", id),
            description: "d".to_string(),
            category: "Personal".to_string(),
            created_at: None,
            posts: vec![CountAggregate { count: 3 }],
            user_goals: vec![CountAggregate { count: 7 }],
        }
    }

    #[test]
    fn test_starts_loading() {
        let listing = GoalListing::new();
        assert!(listing.is_loading());
        assert!(listing.goals().is_empty());
    }

    #[tokio::test]
    async fn test_empty_fetch() {
        let mut listing = GoalListing::new();
        listing.load(&RecordingClient::default()).await;

        assert!(listing.goals().is_empty());
        assert!(!listing.is_loading());
        assert!(listing.error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_keeps_order_and_counts() {
        let client = RecordingClient {
            goals: vec![row("b"), row("a")],
            ..Default::default()
        };
        let mut listing = GoalListing::new();
        listing.load(&client).await;

        let ids: Vec<_> = listing.goals().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(listing.goals()[0].counts.posts, Some(3));
        assert_eq!(listing.goals()[0].counts.participants, Some(7));
    }

    #[tokio::test]
    async fn test_failed_fetch_clears_list() {
        let mut listing = GoalListing::new();
        listing.finish(Ok(vec![row("a")]));

        listing
            .load(&RecordingClient::failing(ClientError::Unavailable))
            .await;

        assert!(listing.goals().is_empty());
        assert!(!listing.is_loading());
        assert_eq!(listing.error(), Some(&ClientError::Unavailable));
    }
}
