//! Reactive auth guard for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components call `use_auth_guard` once while building their view.
//! The hook starts the single user load, exposes readiness as signals, and
//! redirects to `/{locale}/login` once the load has finished without a user.
//!
//! DESIGN
//! ======
//! The redirect effect tracks `(check, user, locale)` and feeds them through
//! `RedirectLatch`, so re-running the effect with unchanged inputs never
//! navigates twice. No redirect is issued while the load is pending, which
//! avoids a flash-redirect during hydration.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{AuthState, Navigator, RedirectLatch, SessionCheck, UserStore, load_session, visible_user};
use crate::net::types::User;

/// `Navigator` backed by a `leptos_router` navigate function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn redirect_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Navigator for the surrounding `<Router>`.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator::new(use_navigate())
}

/// Signals returned by `use_auth_guard`.
#[derive(Clone, Copy)]
pub struct GuardSignals {
    pub user: Signal<Option<User>>,
    pub is_ready: Signal<bool>,
    pub check: ReadSignal<SessionCheck>,
}

/// Guard the calling view: load the user once, then redirect if signed out.
pub fn use_auth_guard<S, N>(store: S, navigator: N, locale: Signal<String>) -> GuardSignals
where
    S: UserStore + Clone + Send + Sync + 'static,
    N: Navigator + 'static,
{
    let (check, set_check) = signal(SessionCheck::Unchecked);
    let (load_failed, set_load_failed) = signal(false);

    let load_store = store.clone();
    spawn_local(async move {
        let failed = load_session(&load_store).await.is_some();
        // Dropped if the view was torn down before the load finished.
        let _ = set_load_failed.try_set(failed);
        let _ = set_check.try_set(SessionCheck::Checked);
    });

    let user = Signal::derive(move || visible_user(store.current_user(), load_failed.get()));
    let is_ready = Signal::derive(move || AuthState::new(user.get(), check.get()).is_ready());

    let mut latch = RedirectLatch::default();
    Effect::new(move || {
        let state = AuthState::new(user.get(), check.get());
        let locale = locale.get();
        if let Some(path) = latch.decide(&state, &locale) {
            log::debug!("auth guard: redirecting to {path}");
            navigator.redirect_to(&path);
        }
    });

    GuardSignals { user, is_ready, check }
}
