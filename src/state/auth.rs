//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the auth guard (core and Leptos hook) to decide readiness and when
//! to send an unauthenticated visitor to the login route.
//!
//! DESIGN
//! ======
//! The session check moves `Unchecked -> Checked` once, when the user load
//! finishes. Readiness and the redirect decision are derived from
//! `(check, user)` on every evaluation instead of being stored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Whether the initial user load has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionCheck {
    /// The load has not finished yet.
    #[default]
    Unchecked,
    /// The load finished, with or without a user.
    Checked,
}

/// Snapshot of what the guard knows about the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub check: SessionCheck,
}

/// What the guard reports to the view it protects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardResult {
    pub user: Option<User>,
    pub is_ready: bool,
}

impl AuthState {
    pub fn new(user: Option<User>, check: SessionCheck) -> Self {
        Self { user, check }
    }

    /// A load has completed and produced a user.
    pub fn is_ready(&self) -> bool {
        self.check == SessionCheck::Checked && self.user.is_some()
    }

    /// A load has completed and there is no user.
    pub fn needs_login_redirect(&self) -> bool {
        self.check == SessionCheck::Checked && self.user.is_none()
    }

    pub fn to_result(&self) -> GuardResult {
        GuardResult { user: self.user.clone(), is_ready: self.is_ready() }
    }
}

/// Login route for a locale, e.g. `/ar/login`.
pub fn login_path(locale: &str) -> String {
    format!("/{locale}/login")
}

/// Turns repeated "needs redirect" evaluations into one navigation per
/// transition into the checked-and-unauthenticated condition.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch {
    issued: Option<String>,
}

impl RedirectLatch {
    /// Return the path to navigate to, or `None` if nothing new is due.
    ///
    /// Re-arms when a user shows up, and fires again for a different locale.
    pub fn decide(&mut self, state: &AuthState, locale: &str) -> Option<String> {
        if !state.needs_login_redirect() {
            self.issued = None;
            return None;
        }
        let path = login_path(locale);
        if self.issued.as_deref() == Some(path.as_str()) {
            return None;
        }
        self.issued = Some(path.clone());
        Some(path)
    }

    /// Path of the redirect currently in effect, if any.
    pub fn issued(&self) -> Option<&str> {
        self.issued.as_deref()
    }
}
