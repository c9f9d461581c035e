//! Locale registry: the set of locales the application makes available.
//!
//! Activation with `locale_accessors = true` reads the registry once, at
//! activation time. Later changes to a registry never reach accessors that
//! were already installed.

use crate::i18n::Locale;

/// Source of the "available locales" list.
pub trait AvailableLocales {
    /// Get the available locales, in registry order.
    fn available_locales(&self) -> Vec<Locale>;
}

/// Ordered registry of available locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
}

impl LocaleRegistry {
    /// Create a registry from a list of locales.
    ///
    /// Duplicate tags are dropped, keeping the first occurrence.
    pub fn new(locales: impl IntoIterator<Item = Locale>) -> Self {
        let mut unique: Vec<Locale> = Vec::new();
        for locale in locales {
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }
        Self { locales: unique }
    }

    /// Check if a locale tag is available.
    pub fn is_available(&self, tag: &str) -> bool {
        self.locales.iter().any(|locale| locale.as_str() == tag)
    }

    /// Get the first registered locale, if any.
    pub fn default_locale(&self) -> Option<&Locale> {
        self.locales.first()
    }

    /// Number of registered locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Check if the registry has no locales.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Default for LocaleRegistry {
    /// A registry containing only English.
    fn default() -> Self {
        Self::new([Locale::new("en")])
    }
}

impl AvailableLocales for LocaleRegistry {
    fn available_locales(&self) -> Vec<Locale> {
        self.locales.clone()
    }
}

impl AvailableLocales for Vec<Locale> {
    fn available_locales(&self) -> Vec<Locale> {
        self.clone()
    }
}
