//! Locale accessors: `title_cz`, `title_cz?` and `title_cz=` for a
//! translated attribute `title`.
//!
//! # Architecture
//!
//! - `names`: Derives the three accessor names for an (attribute, locale) pair
//! - `table`: The name → operation table a model's accessors live in
//! - `dispatch`: Call-time behavior (base accessor vs. `super: true`, locale conflicts)
//! - `synthesizer`: Installs accessors for one attribute and a set of locales
//! - `activation`: Turns the `locale_accessors` option into installations
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_accessors::accessors::{
//!     AccessorTable, ActivationOption, Attributes, LocaleAccessors, Options,
//! };
//! use locale_accessors::i18n::LocaleRegistry;
//!
//! let mut table: AccessorTable<Post> = AccessorTable::new();
//! let mut attributes = Attributes::new(&mut table, ["title"]);
//! let registry = LocaleRegistry::default();
//! LocaleAccessors::apply(&mut attributes, &ActivationOption::AvailableLocales, &registry)?;
//!
//! let title = table.read(&post, "title_en", &Options::new())?;
//! ```

mod activation;
mod base;
mod dispatch;
mod names;
mod options;
mod synthesizer;
mod table;

pub use activation::{ActivationOption, Attributes};
pub use base::BaseAccessor;
pub use dispatch::LOCALE_CONFLICT_WARNING;
pub use names::AccessorNames;
pub use options::Options;
pub use synthesizer::{LocaleAccessors, SetupError};
pub use table::{AccessorTable, DispatchError, Operation, Origin, PredicateFn, ReadFn, WriteFn};
