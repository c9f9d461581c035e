// Library interface for locale accessors
// Exposes modules for the preview binary and integration tests

pub mod accessors;
pub mod config;
pub mod diagnostics;
pub mod i18n;
