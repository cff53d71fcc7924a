//! # facility-client
//!
//! Leptos + WASM frontend for the facility-management service. Covers the
//! cookie-based session lifecycle (restore, login, forced and voluntary
//! logout), the anti-forgery request plumbing, route guarding, and thin
//! CRUD pages for employees, departments, and issues.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
