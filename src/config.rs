use crate::accessors::ActivationOption;
use crate::i18n::{parse_locale_list, Locale};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Activation
    pub locale_accessors: ActivationOption,

    // Locale registry contents
    pub available_locales: Vec<Locale>,

    // Attributes to augment
    pub translated_attributes: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Unset means disabled
            locale_accessors: std::env::var("LOCALE_ACCESSORS")
                .unwrap_or_default()
                .parse::<ActivationOption>()
                .context("LOCALE_ACCESSORS must be true, false, or a list of locales")?,

            available_locales: parse_locale_list(
                &std::env::var("AVAILABLE_LOCALES").unwrap_or_else(|_| "en".to_string()),
            )
            .context("AVAILABLE_LOCALES must be a comma-separated list of locales")?,

            translated_attributes: std::env::var("TRANSLATED_ATTRIBUTES")
                .unwrap_or_else(|_| "title".to_string())
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}
