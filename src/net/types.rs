//! Wire types shared with the job-board API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/auth/me` endpoint.
///
/// Only `id` is required; the API omits profile fields it has not collected yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the phone-verification step has been completed.
    #[serde(default)]
    pub phone_verified: bool,
}
