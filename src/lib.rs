//! # healthtrack-client
//!
//! Leptos + WASM browser client for the HealthTrack clinic booking backend.
//!
//! This crate wraps the clinic REST API (auth, doctors, schedules,
//! appointments), owns the browser-stored session, renders the navigation
//! fragment, and validates form input for the page scripts.
//!
//! Browser-only paths are gated behind the `hydrate` feature. Everything that
//! decides something (request headers, response interpretation, guards,
//! validation, formatting) is plain Rust and runs natively in tests.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind};

/// WASM entry point: installs the panic hook and console logger.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
