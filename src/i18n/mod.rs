//! Locale primitives shared by the accessor machinery.
//!
//! # Architecture
//!
//! - `locale`: Opaque `Locale` tag and its accessor-name suffix
//! - `registry`: The "available locales" collaborator used by activation
//! - `metrics`: Dispatch counters for installed locale accessors
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_accessors::i18n::{AvailableLocales, Locale, LocaleRegistry};
//!
//! let registry = LocaleRegistry::new(["en", "pt-BR"].map(Locale::from));
//! assert_eq!(registry.available_locales().len(), 2);
//! ```

mod locale;
mod metrics;
mod registry;

pub use locale::{parse_locale_list, Locale};
pub use metrics::{AccessorMetrics, MetricsReport};
pub use registry::{AvailableLocales, LocaleRegistry};
