use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use any_spawner::Executor;
use async_trait::async_trait;

use super::*;
use crate::error::ApiError;

#[test]
fn router_navigator_forwards_path() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let navigator = RouterNavigator::new(move |path: &str, _options: NavigateOptions| {
        sink.borrow_mut().push(path.to_owned());
    });

    navigator.redirect_to("/ar/login");

    assert_eq!(*calls.borrow(), vec!["/ar/login".to_owned()]);
}

#[test]
fn router_navigator_uses_default_options() {
    let replaced = Rc::new(RefCell::new(None));
    let sink = replaced.clone();
    let navigator = RouterNavigator::new(move |_path: &str, options: NavigateOptions| {
        *sink.borrow_mut() = Some(options.replace);
    });

    navigator.redirect_to("/en/login");

    assert_eq!(*replaced.borrow(), Some(NavigateOptions::default().replace));
}

// =============================================================
// use_auth_guard
// =============================================================

#[derive(Clone)]
struct SignalFakeStore {
    user: RwSignal<Option<User>>,
    outcome: Result<Option<User>, ApiError>,
    loads: Arc<AtomicUsize>,
}

impl SignalFakeStore {
    fn resolving(outcome: Result<Option<User>, ApiError>) -> Self {
        Self { user: RwSignal::new(None), outcome, loads: Arc::default() }
    }
}

#[async_trait(?Send)]
impl UserStore for SignalFakeStore {
    async fn load_user(&self) -> Result<(), ApiError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(user) => {
                self.user.set(user.clone());
                Ok(())
            }
            Err(e) => Err(e.clone()),
        }
    }

    fn current_user(&self) -> Option<User> {
        self.user.get()
    }
}

#[derive(Clone, Default)]
struct RecordingNavigator {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, path: &str) {
        self.calls.borrow_mut().push(path.to_owned());
    }
}

impl RecordingNavigator {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn user(id: &str) -> User {
    User { id: id.to_owned(), ..User::default() }
}

/// Run spawned loads and pending effects until nothing is left to do.
fn settle() {
    for _ in 0..4 {
        Executor::poll_local();
    }
}

fn run_in_owner(test: impl FnOnce()) {
    let _ = Executor::init_futures_executor();
    Owner::new().with(test);
}

#[test]
fn hook_redirects_signed_out_arabic_visitor_once() {
    run_in_owner(|| {
        let store = SignalFakeStore::resolving(Ok(None));
        let nav = RecordingNavigator::default();
        let locale = RwSignal::new("ar".to_owned());

        let guard = use_auth_guard(store.clone(), nav.clone(), Signal::from(locale));
        assert_eq!(guard.check.get_untracked(), SessionCheck::Unchecked);
        settle();

        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
        assert_eq!(guard.check.get_untracked(), SessionCheck::Checked);
        assert!(!guard.is_ready.get_untracked());
        assert_eq!(guard.user.get_untracked(), None);
        assert_eq!(nav.calls(), vec!["/ar/login".to_owned()]);
    });
}

#[test]
fn hook_marks_signed_in_visitor_ready_without_redirect() {
    run_in_owner(|| {
        let store = SignalFakeStore::resolving(Ok(Some(user("u1"))));
        let nav = RecordingNavigator::default();
        let locale = RwSignal::new("en".to_owned());

        let guard = use_auth_guard(store.clone(), nav.clone(), Signal::from(locale));
        settle();

        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
        assert!(guard.is_ready.get_untracked());
        assert_eq!(guard.user.get_untracked(), Some(user("u1")));
        assert!(nav.calls().is_empty());
    });
}

#[test]
fn hook_does_not_redirect_again_for_same_locale() {
    run_in_owner(|| {
        let store = SignalFakeStore::resolving(Ok(None));
        let nav = RecordingNavigator::default();
        let locale = RwSignal::new("ar".to_owned());

        let _guard = use_auth_guard(store.clone(), nav.clone(), Signal::from(locale));
        settle();
        locale.set("ar".to_owned());
        settle();

        assert_eq!(nav.calls(), vec!["/ar/login".to_owned()]);
        assert_eq!(store.loads.load(Ordering::SeqCst), 1);

        locale.set("en".to_owned());
        settle();

        assert_eq!(nav.calls(), vec!["/ar/login".to_owned(), "/en/login".to_owned()]);
        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn hook_hides_stale_user_after_failed_load() {
    run_in_owner(|| {
        let store = SignalFakeStore::resolving(Err(ApiError::Status(500)));
        store.user.set(Some(user("stale")));
        let nav = RecordingNavigator::default();
        let locale = RwSignal::new("en".to_owned());

        let guard = use_auth_guard(store.clone(), nav.clone(), Signal::from(locale));
        assert!(!guard.is_ready.get_untracked());
        assert!(nav.calls().is_empty());
        settle();

        assert_eq!(guard.check.get_untracked(), SessionCheck::Checked);
        assert_eq!(guard.user.get_untracked(), None);
        assert!(!guard.is_ready.get_untracked());
        assert_eq!(nav.calls(), vec!["/en/login".to_owned()]);
    });
}
