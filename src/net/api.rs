//! REST API helpers for communicating with the job-board server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending the session
//! cookie with every request.
//! Server-side (SSR) and native tests: `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! "Not signed in" is a normal answer (`Ok(None)`), not an error. Only
//! transport failures, unexpected statuses and bad bodies become `ApiError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::error::ApiError;

#[cfg(any(test, feature = "hydrate"))]
/// How a `/auth/me` response status should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionStatus {
    /// Body carries the signed-in user.
    SignedIn,
    /// No session, or the session is no longer accepted.
    SignedOut,
    /// Anything else.
    Failed(u16),
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn current_user_endpoint(api_base_url: &str) -> String {
    format!("{}/auth/me", api_base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_session_status(status: u16) -> SessionStatus {
    match status {
        200..=299 => SessionStatus::SignedIn,
        401 | 403 | 404 => SessionStatus::SignedOut,
        other => SessionStatus::Failed(other),
    }
}

/// Fetch the currently authenticated user from `{api_base_url}/auth/me`.
///
/// # Errors
///
/// Returns `ApiError::Network` if the request could not be sent,
/// `ApiError::Status` for unexpected statuses, `ApiError::Parse` for a bad
/// body, and `ApiError::Unavailable` outside the browser.
pub async fn fetch_current_user(api_base_url: &str) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = current_user_endpoint(api_base_url);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        match classify_session_status(resp.status()) {
            SessionStatus::SignedIn => {
                let user = resp.json::<User>().await.map_err(|e| ApiError::Parse(e.to_string()))?;
                Ok(Some(user))
            }
            SessionStatus::SignedOut => Ok(None),
            SessionStatus::Failed(status) => Err(ApiError::Status(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base_url;
        Err(ApiError::Unavailable)
    }
}
