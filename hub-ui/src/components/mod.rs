//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod goal_card;
pub mod loading;
pub mod nav;
pub mod post_card;
pub mod toast;

pub use goal_card::GoalCard;
pub use loading::{CardSkeleton, Loading};
pub use nav::Nav;
pub use post_card::PostCard;
pub use toast::Toast;
