//! Signal-backed user store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once near the router root and read by guards and user-aware
//! components. Login and logout flows write to it directly; the guard only
//! triggers the initial load and reads.

#[cfg(test)]
#[path = "user_store_test.rs"]
mod user_store_test;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::guard::UserStore;
use crate::net::{api, types::User};

/// Current user held in a signal, loaded from `/auth/me`.
#[derive(Clone, Debug)]
pub struct SignalUserStore {
    user: RwSignal<Option<User>>,
    config: AppConfig,
}

impl SignalUserStore {
    pub fn new(config: AppConfig) -> Self {
        Self { user: RwSignal::new(None), config }
    }

    /// Reactive view of the current user.
    pub fn user(&self) -> RwSignal<Option<User>> {
        self.user
    }

    /// Store a user after a successful sign-in.
    pub fn set_user(&self, user: User) {
        self.user.set(Some(user));
    }

    /// Forget the current user, typically on sign-out.
    pub fn clear(&self) {
        self.user.set(None);
    }
}

#[async_trait(?Send)]
impl UserStore for SignalUserStore {
    async fn load_user(&self) -> Result<(), ApiError> {
        let fetched = api::fetch_current_user(&self.config.api_base_url).await;
        // The owning view may be gone by the time the request finishes.
        match fetched {
            Ok(user) => {
                let _ = self.user.try_set(user);
                Ok(())
            }
            Err(e) => {
                let _ = self.user.try_set(None);
                Err(e)
            }
        }
    }

    fn current_user(&self) -> Option<User> {
        self.user.get()
    }
}

/// Create a `SignalUserStore` and provide it as context.
pub fn provide_user_store(config: AppConfig) -> SignalUserStore {
    let store = SignalUserStore::new(config);
    provide_context(store.clone());
    store
}
