//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state from context and delegate decisions to
//! `hooks` and `state`; they own only presentation.

pub mod locale_html;
pub mod require_auth;
