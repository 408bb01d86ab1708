//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod chat;
pub mod connect;
pub mod create;
pub mod goal_detail;
pub mod goal_page;
pub mod goals;
pub mod home;
pub mod profile;
pub mod shorts;

pub use analytics::Analytics;
pub use chat::Chat;
pub use connect::Connect;
pub use create::CreatePage;
pub use goal_detail::GoalDetail;
pub use goal_page::GoalPage;
pub use goals::Goals;
pub use home::Home;
pub use profile::Profile;
pub use shorts::Shorts;
