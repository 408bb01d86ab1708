//! AspirationHub
//!
//! Goal-sharing single-page app built with Leptos (WASM).
//!
//! # Features
//!
//! - Goal listing with post and participant counts
//! - Goal/post creation against the data store
//! - Community feed, chat channels and shorts reel
//! - Profile and analytics dashboards
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! View state lives in the `aspiration_hub::views` values; this crate only
//! wires them to signals and talks to the data store over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
