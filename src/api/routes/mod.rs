//! API Routes
//!
//! Route handlers organized by functionality.

pub mod catalog;
pub mod goals;
pub mod health;
pub mod posts;
