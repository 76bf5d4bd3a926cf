//! Message catalogs compiled into the bundle.
//!
//! TRADE-OFFS
//! ==========
//! Catalogs are embedded with `include_str!` rather than fetched, so message
//! lookup never suspends. A catalog that fails to parse falls back to English
//! instead of rendering raw keys.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::collections::HashMap;

use super::Locale;

const EN_CATALOG: &str = include_str!("../../locales/en.json");
const AR_CATALOG: &str = include_str!("../../locales/ar.json");

/// Flat key -> text catalog for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl Messages {
    /// Load the catalog for `locale`, falling back to English if it cannot be read.
    pub fn load(locale: Locale) -> Self {
        Self::from_source(locale, catalog_source(locale))
    }

    fn from_source(locale: Locale, source: &str) -> Self {
        match serde_json::from_str::<HashMap<String, String>>(source) {
            Ok(entries) => Self { locale, entries },
            Err(e) if locale != Locale::DEFAULT => {
                log::warn!("message catalog for {locale} is invalid ({e}); using {}", Locale::DEFAULT);
                Self::load(Locale::DEFAULT)
            }
            Err(e) => {
                log::warn!("default message catalog is invalid: {e}");
                Self { locale, entries: HashMap::new() }
            }
        }
    }

    /// Locale whose catalog is actually in use.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up `key`, returning the key itself when it has no entry.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, String::as_str)
    }
}

fn catalog_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_CATALOG,
        Locale::Ar => AR_CATALOG,
    }
}
