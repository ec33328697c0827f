//! # floorease-client
//!
//! Leptos + WASM frontend for the FloorEase flooring services site.
//!
//! This crate contains pages, components, form/flow state, validators, and
//! the REST client used to talk to the FloorEase backend. The same crate is
//! linked into `floorease-server` for SSR (`ssr` feature) and compiled to WASM
//! for hydration in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
