//! AspirationHub Data Store
//!
//! SQLite-backed tables behind the remote data boundary:
//!
//! - **goals**: `id, title, description, category, created_at`
//! - **posts**: `id, goal_id → goals, content, media_url (JSON array), created_at`
//! - **user_goals**: `user_id, goal_id → goals, joined_at` (participant links)
//!
//! Only select and insert paths exist. Goal listings carry the post and
//! participant counts computed at read time.
//!
//! # Example
//!
//! ```rust,no_run
//! use aspiration_hub::models::{Category, NewGoal};
//! use aspiration_hub::store::GoalStore;
//!
//! let store = GoalStore::open("./data")?;
//! store.insert_goal(&NewGoal {
//!     title: "Run a 5K".into(),
//!     description: "Train for 8 weeks".into(),
//!     category: Category::Fitness,
//! })?;
//!
//! for goal in store.list_goals()? {
//!     println!("{} ({} posts)", goal.title, goal.post_count);
//! }
//! # Ok::<(), aspiration_hub::store::StoreError>(())
//! ```

pub mod error;
pub mod sqlite;

pub use error::{StoreError, StoreResult};
pub use sqlite::{GoalRecord, GoalStore, PostRecord, StoreStats};
