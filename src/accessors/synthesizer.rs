//! Locale accessor synthesis.
//!
//! `LocaleAccessors` is bound to one attribute and a set of locales. For each
//! locale it installs a reader, a predicate and a writer onto an
//! [`AccessorTable`], e.g. `title_cz`, `title_cz?` and `title_cz=`.

use crate::accessors::dispatch::{self, AccessorContext};
use crate::accessors::{AccessorNames, AccessorTable, BaseAccessor, Operation};
use crate::i18n::Locale;
use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Invalid synthesizer configuration, detected before anything is installed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no locales configured for locale accessors of `{attribute}`")]
    NoLocales { attribute: String },

    #[error("locales `{first}` and `{second}` both map to accessor `{name}`")]
    AmbiguousLocales {
        first: Locale,
        second: Locale,
        name: String,
    },
}

/// Locale accessors for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleAccessors {
    attribute: String,
    locales: Vec<Locale>,
}

impl LocaleAccessors {
    /// Bind an attribute to a set of locales.
    ///
    /// Repeated locales are collapsed. Fails when the set is empty or when
    /// two locales would produce the same accessor names.
    pub fn new(
        attribute: impl Into<String>,
        locales: impl IntoIterator<Item = Locale>,
    ) -> Result<Self, SetupError> {
        let attribute = attribute.into();
        let mut unique: Vec<Locale> = Vec::new();

        for locale in locales {
            if unique.contains(&locale) {
                continue;
            }
            let suffix = locale.accessor_suffix();
            if let Some(existing) = unique.iter().find(|l| l.accessor_suffix() == suffix) {
                return Err(SetupError::AmbiguousLocales {
                    first: existing.clone(),
                    second: locale,
                    name: AccessorNames::derive(&attribute, existing).reader,
                });
            }
            unique.push(locale);
        }

        if unique.is_empty() {
            return Err(SetupError::NoLocales { attribute });
        }

        Ok(Self {
            attribute,
            locales: unique,
        })
    }

    /// Get the attribute these accessors are derived for.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Get the deduplicated locales, in configuration order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Names that [`install`](Self::install) defines, in locale order.
    pub fn names(&self) -> Vec<AccessorNames> {
        self.locales
            .iter()
            .map(|locale| AccessorNames::derive(&self.attribute, locale))
            .collect()
    }

    /// Install the accessors for every locale onto `table`.
    ///
    /// Whatever is already defined under a derived name stays reachable
    /// through `super: true`. Returns the installed operation names.
    pub fn install<M>(&self, table: &mut AccessorTable<M>) -> Vec<String>
    where
        M: BaseAccessor + 'static,
    {
        let attribute: Arc<str> = Arc::from(self.attribute.as_str());
        let metrics = Arc::clone(table.metrics());
        let mut installed = Vec::with_capacity(self.locales.len() * 3);

        for locale in &self.locales {
            let names = AccessorNames::derive(&self.attribute, locale);
            let context = |name: &str| AccessorContext {
                attribute: Arc::clone(&attribute),
                locale: locale.clone(),
                name: Arc::from(name),
                metrics: Arc::clone(&metrics),
            };

            let previous = table.previous_definition(&names.reader);
            let reader = dispatch::reader(
                context(&names.reader),
                previous.clone().and_then(Operation::into_reader),
            );
            table.install_locale_accessor(names.reader.clone(), reader, previous);

            let previous = table.previous_definition(&names.predicate);
            let predicate = dispatch::predicate(
                context(&names.predicate),
                previous.clone().and_then(Operation::into_predicate),
            );
            table.install_locale_accessor(names.predicate.clone(), predicate, previous);

            let previous = table.previous_definition(&names.writer);
            let writer = dispatch::writer(
                context(&names.writer),
                previous.clone().and_then(Operation::into_writer),
            );
            table.install_locale_accessor(names.writer.clone(), writer, previous);

            installed.extend(names.all().map(String::from));
            debug!(
                "Installed locale accessors for {} in locale {}",
                self.attribute, locale
            );
        }

        installed
    }
}
