//! # swolept
//!
//! Leptos + WASM frontend for the SwolePT workout tracker. Users sign in,
//! upload workout CSV exports, browse their history, and request an
//! AI-generated training analysis.
//!
//! The crate is organized around the authentication core: a pluggable
//! credential provider (`net::provider`), a persisted session token
//! (`util::session_store`), a shared session controller (`state::auth`),
//! and route guards (`util::guard`). Pages and components consume those
//! through Leptos context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
