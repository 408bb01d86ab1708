//! Application State
//!
//! Shared state accessible by all API handlers.

use crate::config::ApiConfig;
use crate::store::GoalStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Goal/post store
    pub store: Arc<GoalStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<GoalStore>, config: ApiConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether a key must accompany `/api/v1` requests
    pub fn requires_key(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_key_follows_config() {
        let store = Arc::new(GoalStore::in_memory().unwrap());

        let open = AppState::new(Arc::clone(&store), ApiConfig::default());
        assert!(!open.requires_key());

        let keyed = AppState::new(
            store,
            ApiConfig {
                api_key: Some("anon-key".to_string()),
                ..Default::default()
            },
        );
        assert!(keyed.requires_key());
    }
}
