//! Per-view state
//!
//! Each view keeps its state as a plain value with explicit transitions.
//! The frontend wraps these in signals; the CLI and tests drive them
//! directly. Async operations take any [`DataClient`](crate::client::DataClient).

pub mod chat;
pub mod create;
pub mod likes;
pub mod listing;
pub mod route;
pub mod shorts;

pub use chat::ChannelSelector;
pub use create::{CreateForm, FormError, FormMode, GoalDraft, PostDraft, Submission, SubmitOutcome};
pub use likes::{LikeCounters, LikeSet};
pub use listing::GoalListing;
pub use route::Route;
pub use shorts::ShortsCursor;
