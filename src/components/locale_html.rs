//! Applies the resolved locale to the `<html>` element.
//!
//! Needs `provide_meta_context()` higher in the tree.

use leptos::prelude::*;
use leptos_meta::Html;

use crate::i18n::resolve_locale;

/// Sets `lang` and `dir` on the document root from a route locale segment.
#[component]
pub fn LocaleHtml(#[prop(into)] locale: Signal<String>) -> impl IntoView {
    let resolved = Memo::new(move |_| resolve_locale(&locale.get()));

    view! { <Html {..} lang=move || resolved.get().code() dir=move || resolved.get().dir().as_str() /> }
}
