//! State Management
//!
//! Global application state shared by all pages.

pub mod global;

pub use global::{provide_global_state, GlobalState};
