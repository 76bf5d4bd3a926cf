//! # jobboard-web
//!
//! Leptos + WASM front-end library for the localized job board.
//!
//! This crate holds the client-side authentication guard, the user store it
//! reads from, locale resolution with message catalogs, and the runtime
//! configuration for API and WebSocket endpoints. Route pages compose these
//! pieces; they live outside this crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` is framework-independent and drives everything through the
//! `UserStore` and `Navigator` traits. `hooks` and `components` bind it to
//! Leptos signals and the router.

pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod hooks;
pub mod i18n;
pub mod net;
pub mod state;

/// Install browser logging and the panic hook.
///
/// Call once from the hydrate entry point before mounting the app.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
