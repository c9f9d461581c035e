use crate::accessors::Options;
use anyhow::Result;
use serde_json::Value;

/// The locale-parameterized accessor every model exposes for its attributes.
///
/// Locale accessors forward here with `options.locale` set to their own
/// locale. Errors returned by an implementation reach the caller unchanged.
pub trait BaseAccessor {
    /// Read `attribute` (e.g. `title(locale: cz)`).
    fn get(&self, attribute: &str, options: &Options) -> Result<Value>;

    /// Check whether `attribute` is present (e.g. `title?(locale: cz)`).
    fn predicate(&self, attribute: &str, options: &Options) -> Result<bool>;

    /// Write `attribute` (e.g. `title=(value, locale: cz)`).
    fn set(&mut self, attribute: &str, value: Value, options: &Options) -> Result<()>;
}
