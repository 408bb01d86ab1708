//! API Layer
//!
//! HTTP access to the AspirationHub data store.

pub mod client;

pub use client::*;
