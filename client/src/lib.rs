//! # client
//!
//! Leptos + WASM front-end for the Studyhall exam platform. Students sign in
//! with an email access code, pick an exam from the dashboard, and take it
//! under the integrity rules enforced by the [`proctor`] engine crate: the
//! countdown, autosave, unload guard, and violation monitoring are wired up
//! here, while every rule about *what* those events mean lives in `proctor`.
//!
//! This crate contains pages, components, application state, network types,
//! and the hydrate-only browser glue (event listeners, timers, storage).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger was already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
