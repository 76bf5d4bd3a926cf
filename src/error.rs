//! Error types for client-side API calls.
//!
//! ERROR HANDLING
//! ==============
//! Fetch helpers return `ApiError` instead of panicking so a failed user load
//! degrades to the unauthenticated path rather than breaking hydration.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while talking to the job-board API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with an unexpected non-success status.
    #[error("request failed: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}
