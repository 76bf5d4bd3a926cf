//! Wrapper that renders its children only for signed-in users.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;

use crate::guard::SessionCheck;
use crate::hooks::auth_guard::{use_auth_guard, use_router_navigator};
use crate::i18n::{Messages, resolve_locale};
use crate::state::user_store::SignalUserStore;

/// Catalog key for the placeholder shown while the guard is not ready.
fn pending_message_key(check: SessionCheck) -> &'static str {
    match check {
        SessionCheck::Unchecked => "guard.checkingSession",
        SessionCheck::Checked => "guard.redirecting",
    }
}

/// Guarded content. Requires a `SignalUserStore` in context and a `<Router>`.
#[component]
pub fn RequireAuth(#[prop(into)] locale: Signal<String>, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SignalUserStore>();
    let guard = use_auth_guard(store, use_router_navigator(), locale);
    let messages = Memo::new(move |_| Messages::load(resolve_locale(&locale.get())));

    let pending = move || {
        let key = pending_message_key(guard.check.get());
        messages.with(|m| m.get(key).to_owned())
    };

    view! {
        <Show
            when=move || guard.is_ready.get()
            fallback=move || view! { <div class="auth-guard__pending" role="status">{pending}</div> }
        >
            {children()}
        </Show>
    }
}
