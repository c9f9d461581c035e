//! Options bag accepted by accessors.

use crate::i18n::Locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options passed to an accessor call.
///
/// `locale` and `super` are recognized; any other key is kept in `extra` and
/// passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Locale requested by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Delegate to the definition that existed before the locale accessor
    #[serde(rename = "super", default, skip_serializing_if = "is_false")]
    pub use_super: bool,

    /// Options this crate does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Options {
    /// Create an empty options bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a dynamic options bag (a JSON object, or `null` for none).
    pub fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).context("Invalid accessor options")
    }

    /// Set the `locale` option.
    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set `super: true`.
    pub fn with_super(mut self) -> Self {
        self.use_super = true;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Copy of these options with the `super` flag cleared.
    pub(crate) fn without_super(&self) -> Self {
        Self {
            use_super: false,
            ..self.clone()
        }
    }

    /// Copy of these options with `locale` forced to the given locale.
    pub(crate) fn with_forced_locale(&self, locale: &Locale) -> Self {
        Self {
            locale: Some(locale.clone()),
            use_super: false,
            extra: self.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let options = Options::new();
        assert!(options.locale.is_none());
        assert!(!options.use_super);
        assert!(options.extra.is_empty());
    }

    #[test]
    fn test_builder() {
        let options = Options::new()
            .with_locale("en")
            .with_super()
            .with_extra("fallback", json!(false));

        assert_eq!(options.locale, Some(Locale::new("en")));
        assert!(options.use_super);
        assert_eq!(options.extra["fallback"], json!(false));
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_from_value_recognizes_keys() {
        let options =
            Options::from_value(json!({"locale": "cz", "super": true, "fallback": ["de"]}))
                .expect("Should parse");

        assert_eq!(options.locale, Some(Locale::new("cz")));
        assert!(options.use_super);
        assert_eq!(options.extra.len(), 1);
        assert_eq!(options.extra["fallback"], json!(["de"]));
    }

    #[test]
    fn test_from_value_null_is_empty_bag() {
        assert_eq!(Options::from_value(Value::Null).unwrap(), Options::default());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(Options::from_value(json!(["locale", "en"])).is_err());
    }

    #[test]
    fn test_from_value_rejects_non_boolean_super() {
        let result = Options::from_value(json!({"super": "yes"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_omits_defaults() {
        let json = serde_json::to_value(Options::new().with_locale("de")).unwrap();
        assert_eq!(json, json!({"locale": "de"}));
    }

    // ==================== Rewrite Tests ====================

    #[test]
    fn test_without_super_keeps_everything_else() {
        let options = Options::new()
            .with_locale("en")
            .with_super()
            .with_extra("fallback", json!(true));

        let stripped = options.without_super();
        assert!(!stripped.use_super);
        assert_eq!(stripped.locale, Some(Locale::new("en")));
        assert_eq!(stripped.extra, options.extra);
    }

    #[test]
    fn test_with_forced_locale_overrides_caller_locale() {
        let options = Options::new()
            .with_locale("en")
            .with_extra("fallback", json!(false));

        let forced = options.with_forced_locale(&Locale::new("cz"));
        assert_eq!(forced.locale, Some(Locale::new("cz")));
        assert_eq!(forced.extra["fallback"], json!(false));
    }
}
