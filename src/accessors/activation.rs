//! Declarative activation of locale accessors.
//!
//! The `locale_accessors` option of a set of translated attributes decides
//! whether accessors are installed and for which locales:
//!
//! - `true`: every locale the registry makes available at activation time
//! - a list of locales: exactly those locales
//! - `false` or absent: nothing is installed

use crate::accessors::{AccessorTable, BaseAccessor, LocaleAccessors};
use crate::i18n::{parse_locale_list, AvailableLocales, Locale};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use tracing::{debug, info};

/// Value of the `locale_accessors` option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivationOption {
    /// `false` or absent
    #[default]
    Disabled,
    /// `true`: use the registry's available locales
    AvailableLocales,
    /// An explicit list of locales
    Locales(Vec<Locale>),
}

impl From<bool> for ActivationOption {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::AvailableLocales
        } else {
            Self::Disabled
        }
    }
}

impl From<Vec<Locale>> for ActivationOption {
    fn from(locales: Vec<Locale>) -> Self {
        Self::Locales(locales)
    }
}

impl<T: Into<ActivationOption>> From<Option<T>> for ActivationOption {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Accepted shapes: `true`, `false`, `null`, or a list of locale tags.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RawOption {
    Flag(bool),
    Locales(Vec<Locale>),
}

impl<'de> Deserialize<'de> for ActivationOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawOption>::deserialize(deserializer)? {
            None => Self::Disabled,
            Some(RawOption::Flag(enabled)) => Self::from(enabled),
            Some(RawOption::Locales(locales)) => Self::Locales(locales),
        })
    }
}

impl Serialize for ActivationOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => RawOption::Flag(false).serialize(serializer),
            Self::AvailableLocales => RawOption::Flag(true).serialize(serializer),
            Self::Locales(locales) => locales.serialize(serializer),
        }
    }
}

impl FromStr for ActivationOption {
    type Err = anyhow::Error;

    /// Parse the environment form: `true`, `false`, empty, or `en,fr`.
    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        match input {
            "" | "false" => Ok(Self::Disabled),
            "true" => Ok(Self::AvailableLocales),
            _ => {
                let locales = parse_locale_list(input)?;
                if locales.is_empty() {
                    bail!("Invalid locale_accessors value: '{}'", input);
                }
                Ok(Self::Locales(locales))
            }
        }
    }
}

/// The translated attributes of one model and the table they are installed on.
pub struct Attributes<'a, M> {
    model_class: &'a mut AccessorTable<M>,
    names: Vec<String>,
}

impl<'a, M> Attributes<'a, M> {
    pub fn new<I, S>(model_class: &'a mut AccessorTable<M>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            model_class,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn model_class(&mut self) -> &mut AccessorTable<M> {
        &mut *self.model_class
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl LocaleAccessors {
    /// Install locale accessors for every attribute according to `option`.
    ///
    /// The registry is consulted only for [`ActivationOption::AvailableLocales`],
    /// once. Every synthesizer is validated before the first one is
    /// installed, so a setup error leaves the table untouched. Returns the
    /// installed synthesizers.
    pub fn apply<M, R>(
        attributes: &mut Attributes<'_, M>,
        option: &ActivationOption,
        registry: &R,
    ) -> Result<Vec<LocaleAccessors>>
    where
        M: BaseAccessor + 'static,
        R: AvailableLocales + ?Sized,
    {
        let locales = match option {
            ActivationOption::Disabled => {
                debug!("Locale accessors disabled for {:?}", attributes.names());
                return Ok(Vec::new());
            }
            ActivationOption::AvailableLocales => registry.available_locales(),
            ActivationOption::Locales(locales) => locales.clone(),
        };

        let synthesizers = attributes
            .names()
            .iter()
            .map(|name| LocaleAccessors::new(name.as_str(), locales.iter().cloned()))
            .collect::<Result<Vec<_>, _>>()?;

        for synthesizer in &synthesizers {
            synthesizer.install(attributes.model_class());
        }

        info!(
            "Activated locale accessors for {} attribute(s) in {} locale(s)",
            synthesizers.len(),
            locales.len()
        );
        Ok(synthesizers)
    }
}
