//! Client state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the plain session-check state and its resolution rules;
//! `user_store` is the signal-backed holder of the current identity.

pub mod auth;
pub mod user_store;
