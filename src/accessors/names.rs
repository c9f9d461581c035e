//! Derived accessor names.

use crate::i18n::Locale;
use serde::Serialize;

/// The three operation names derived for one (attribute, locale) pair.
///
/// For attribute `title` and locale `pt-BR` these are `title_pt_br`,
/// `title_pt_br?` and `title_pt_br=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorNames {
    pub reader: String,
    pub predicate: String,
    pub writer: String,
}

impl AccessorNames {
    /// Derive the reader, predicate and writer names for `attribute` in `locale`.
    pub fn derive(attribute: &str, locale: &Locale) -> Self {
        let reader = format!("{}_{}", attribute, locale.accessor_suffix());
        Self {
            predicate: format!("{}?", reader),
            writer: format!("{}=", reader),
            reader,
        }
    }

    /// All three names, reader first.
    pub fn all(&self) -> [&str; 3] {
        [self.reader.as_str(), self.predicate.as_str(), self.writer.as_str()]
    }
}
