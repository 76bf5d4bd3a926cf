//! Leptos hooks.
//!
//! ARCHITECTURE
//! ============
//! Hooks adapt framework-independent logic to signals and effects; the rules
//! themselves live in `guard` and `state`.

pub mod auth_guard;
