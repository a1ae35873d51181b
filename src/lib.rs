//! # mcp-console
//!
//! Leptos + WASM front-end for listing and registering MCP devices.
//!
//! This crate contains pages, components, and application state for a
//! two-screen UI: a device list backed by in-memory sample data and a
//! registration form that reports its input to the browser console.
//! There is no backend; registration is deliberately a no-op write.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
