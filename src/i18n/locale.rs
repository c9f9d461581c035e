//! Locale type: opaque, validated locale tag.
//!
//! A `Locale` is treated as an opaque identifier (e.g. "cz", "de", "pt-BR").
//! The only interpretation this crate applies to it is the accessor suffix
//! used when deriving locale accessor names.

use anyhow::{bail, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A locale tag.
///
/// Equality is exact: `pt-BR` and `pt_br` are different locales even though
/// they share an accessor suffix.
/// Deserialization applies the same validation as [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Locale(String);

// Characters that cannot appear in a derived accessor name
static NON_IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

fn non_identifier_regex() -> &'static Regex {
    NON_IDENTIFIER_REGEX.get_or_init(|| {
        Regex::new(r"[^a-z0-9_]").expect("Invalid non-identifier regex")
    })
}

impl Locale {
    /// Create a locale from a tag without validation.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the raw locale tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the suffix used in accessor names for this locale.
    ///
    /// The tag is lowercased and every character outside `[a-z0-9_]` is
    /// replaced with `_`, so `pt-BR` becomes `pt_br`.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Locale::new("pt-BR").accessor_suffix(), "pt_br");
    /// ```
    pub fn accessor_suffix(&self) -> String {
        let lowered = self.0.to_lowercase();
        non_identifier_regex()
            .replace_all(&lowered, "_")
            .into_owned()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl TryFrom<String> for Locale {
    type Error = anyhow::Error;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    /// Parse a locale tag from configuration input.
    ///
    /// Rejects empty tags and tags containing whitespace or commas.
    fn from_str(tag: &str) -> Result<Self> {
        if tag.is_empty() {
            bail!("Locale tag cannot be empty");
        }
        if tag.chars().any(|c| c.is_whitespace() || c == ',') {
            bail!("Invalid locale tag: '{}'", tag);
        }
        Ok(Self::new(tag))
    }
}

/// Parse a comma-separated list of locale tags, skipping blank entries.
pub fn parse_locale_list(input: &str) -> Result<Vec<Locale>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::parse)
        .collect()
}
