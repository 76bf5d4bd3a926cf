//! Networking modules for the job-board REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
