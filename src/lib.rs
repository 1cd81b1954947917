//! # club-portal
//!
//! Leptos + WASM client for a campus club management portal: an infinite
//! scrolling event feed, event detail with registration, event creation,
//! profile, and a scrapbook backed by an upload service.
//!
//! The same crate builds the browser bundle (`hydrate`) and the SSR host
//! binary (`ssr`). Browser-only code sits behind `#[cfg(feature = "hydrate")]`
//! so state machines, DTOs and validation stay testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic and log hooks, then hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
