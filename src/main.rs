//! Approval Workflow Sandbox
//!
//! Single-page Dioxus app demonstrating the employee submission and manager
//! approval journey as in-memory view states. No backend, no persistence,
//! no real email delivery.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod state;
mod types;
mod workflow;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    launch_app();
}

#[cfg(feature = "web")]
fn launch_app() {
    dioxus::launch(app::App);
}

// Renderer-less builds (plain `cargo test` / `cargo check`) still compile
// the whole tree; there is just nothing to launch.
#[cfg(not(feature = "web"))]
fn launch_app() {
    let _ = app::App;
    tracing::warn!("built without a renderer; run with `dx serve --features web`");
}
