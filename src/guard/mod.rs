//! Authentication guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! A protected page creates one guard on activation. The guard loads the
//! current user through an injected `UserStore`, and once that load has
//! finished it either reports the view as ready or sends the visitor to the
//! locale's login route through an injected `Navigator`.
//!
//! DESIGN
//! ======
//! There is no implicit reactive runtime here. `activate` runs the single
//! load; callers invoke `observe` whenever the store's user may have changed
//! and `set_locale` when the route locale changes. `hooks::auth_guard` maps
//! the same rules onto Leptos signals.
//!
//! ERROR HANDLING
//! ==============
//! A failed load is treated like "no user": the check still completes, any
//! user already sitting in the store is hidden, and the visitor is
//! redirected. The error is logged and kept for diagnostics.


use async_trait::async_trait;

use crate::error::ApiError;
use crate::net::types::User;
pub use crate::state::auth::{AuthState, GuardResult, RedirectLatch, SessionCheck, login_path};

/// Holder of the current identity and the operation that loads it.
#[async_trait(?Send)]
pub trait UserStore {
    /// Load (or refresh) the current user into the store.
    async fn load_user(&self) -> Result<(), ApiError>;

    /// The user currently held by the store.
    fn current_user(&self) -> Option<User>;
}

/// Path-based navigation, fire-and-forget.
pub trait Navigator {
    fn redirect_to(&self, path: &str);
}

/// Run the store's one-time load, collapsing a failure into "signed out".
///
/// Returns the error when the load failed; callers then hide the store's user
/// with `visible_user`.
pub async fn load_session<S>(store: &S) -> Option<ApiError>
where
    S: UserStore + ?Sized,
{
    match store.load_user().await {
        Ok(()) => None,
        Err(e) => {
            log::warn!("auth guard: user load failed, treating as signed out: {e}");
            Some(e)
        }
    }
}

/// The user a guard may report: none once the load has failed.
pub fn visible_user(user: Option<User>, load_failed: bool) -> Option<User> {
    if load_failed { None } else { user }
}

/// Guard state for one activation of a protected view.
pub struct AuthGuard<S, N> {
    store: S,
    navigator: N,
    locale: String,
    check: SessionCheck,
    load_started: bool,
    latch: RedirectLatch,
    last_load_error: Option<ApiError>,
}

impl<S, N> AuthGuard<S, N>
where
    S: UserStore,
    N: Navigator,
{
    pub fn new(store: S, navigator: N, locale: impl Into<String>) -> Self {
        Self {
            store,
            navigator,
            locale: locale.into(),
            check: SessionCheck::Unchecked,
            load_started: false,
            latch: RedirectLatch::default(),
            last_load_error: None,
        }
    }

    /// Run the user load (first call only), then evaluate.
    ///
    /// Later calls skip the load and behave like `observe`. If this future is
    /// dropped before the load finishes the guard stays `Unchecked`.
    pub async fn activate(&mut self) -> GuardResult {
        if !self.load_started {
            self.load_started = true;
            log::debug!("auth guard: loading user for locale {}", self.locale);
            self.last_load_error = load_session(&self.store).await;
            self.check = SessionCheck::Checked;
        }
        self.observe()
    }

    /// Re-evaluate against the store's current user.
    ///
    /// Navigates to the login route at most once per transition into the
    /// checked-and-unauthenticated condition.
    pub fn observe(&mut self) -> GuardResult {
        let user = visible_user(self.store.current_user(), self.last_load_error.is_some());
        let state = AuthState::new(user, self.check);
        if let Some(path) = self.latch.decide(&state, &self.locale) {
            log::debug!("auth guard: redirecting to {path}");
            self.navigator.redirect_to(&path);
        }
        state.to_result()
    }

    /// Switch the locale used for the login route, then evaluate.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> GuardResult {
        self.locale = locale.into();
        self.observe()
    }

    pub fn check(&self) -> SessionCheck {
        self.check
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Error from the load, if it failed.
    pub fn last_load_error(&self) -> Option<&ApiError> {
        self.last_load_error.as_ref()
    }
}
