//! # client
//!
//! Leptos + WASM frontend for the AgentX voice barista storefront.
//!
//! This crate contains the storefront page, its components, the session and
//! visualization state models, and the session seam that connects the UI to
//! an external real-time gateway. Media transport and session negotiation are
//! owned by that gateway; this crate only renders what it reports and
//! forwards user input back to it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::read_embedded();
    leptos::mount::hydrate_body(move || view! { <app::App config=config/> });
}
