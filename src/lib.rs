//! # AspirationHub
//!
//! Goal sharing for personal development: users create goals in four
//! categories, attach posts to them, browse community content and track
//! progress.
//!
//! ## Modules
//!
//! - [`models`]: Goal, post, short, channel, profile and analytics records
//! - [`catalog`]: Compiled-in sample data for the read-only views
//! - [`client`]: The select/insert contract against the remote data store
//! - [`views`]: Per-view state values and their transitions
//! - [`store`]: SQLite goal/post store (feature `server`)
//! - [`api`]: Axum data-store service (feature `server`)
//! - [`config`]: TOML + environment configuration (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aspiration_hub::client::StoreClient;
//! use aspiration_hub::models::Category;
//! use aspiration_hub::store::GoalStore;
//! use aspiration_hub::views::{CreateForm, GoalListing, SubmitOutcome};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StoreClient::new(Arc::new(GoalStore::open("./data")?));
//!
//!     let mut form = CreateForm::new();
//!     form.toggle_mode();
//!     form.set_title("Run a 5K");
//!     form.set_description("Train for 8 weeks");
//!     form.set_category(Some(Category::Fitness));
//!
//!     if let SubmitOutcome::Navigate(route) = form.submit(&client).await {
//!         println!("created, go to {}", route);
//!     }
//!
//!     let mut listing = GoalListing::new();
//!     listing.load(&client).await;
//!     println!("{} goals", listing.goals().len());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod models;
pub mod views;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod store;

// Re-export top-level types for convenience
pub use client::{ClientError, DataClient, GoalRow, PostRow};
pub use models::{Category, Goal, GoalOption, NewGoal, NewPost, Post};
pub use views::{CreateForm, GoalListing, Route, SubmitOutcome};

#[cfg(feature = "server")]
pub use client::{HttpDataClient, RemoteConfig, StoreClient};

#[cfg(feature = "server")]
pub use store::{GoalStore, StoreError, StoreResult};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError};
