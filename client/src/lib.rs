//! # client
//!
//! Leptos frontend for the PatientTrack clinic dashboard.
//!
//! This crate contains the route table, pages, components, application state,
//! and the browser key-value storage layer. The same code renders on the
//! server (`ssr`) and hydrates in the browser (`hydrate`); without either
//! feature it compiles as a plain library so state logic can be unit tested.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: attach the client app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
