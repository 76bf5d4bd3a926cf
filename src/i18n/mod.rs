//! Locale resolution for localized routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route is prefixed with a locale segment (`/en/...`, `/ar/...`). The
//! segment is resolved here into one of the supported locales, and the
//! resolved locale picks the message catalog and the document direction.


pub mod messages;

pub use messages::Messages;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction for a locale, as used by the HTML `dir` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale, default first.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ar]
    }

    /// BCP 47 code used in URLs and the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn dir(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a requested locale tag to a supported locale.
///
/// Matching is case-insensitive on the primary subtag, so `ar-EG` and `AR`
/// both resolve to Arabic. Anything unsupported falls back to English.
pub fn resolve_locale(requested: &str) -> Locale {
    let primary = requested.trim().split(['-', '_']).next().unwrap_or_default();
    Locale::all()
        .iter()
        .copied()
        .find(|locale| locale.code().eq_ignore_ascii_case(primary))
        .unwrap_or_else(|| {
            log::debug!("unsupported locale {requested:?}, using {}", Locale::DEFAULT);
            Locale::DEFAULT
        })
}
