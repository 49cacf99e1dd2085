//! # client
//!
//! Leptos + WASM front-end for the user roster page.
//!
//! The page issues a single `GET /api/users` on mount and renders the result
//! as a table, an empty-state message, or an error. A standalone click
//! counter sits underneath and shares nothing with the roster.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
