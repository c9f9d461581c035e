//! Call-time behavior of locale accessors.
//!
//! Every locale accessor has two paths:
//!
//! - default: forward to the model's [`BaseAccessor`] with `locale` forced to
//!   the accessor's own locale
//! - override (`super: true`): call the definition that existed under the same
//!   name before the accessor was installed, bypassing the base accessor

use crate::accessors::table::{DispatchError, Operation, PredicateFn, ReadFn, WriteFn};
use crate::accessors::{BaseAccessor, Options};
use crate::i18n::{AccessorMetrics, Locale};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Message of the warning emitted when a caller's `locale` option is ignored.
pub const LOCALE_CONFLICT_WARNING: &str =
    "locale passed as option to locale accessor will be ignored";

/// What a locale accessor captures when it is installed.
#[derive(Debug, Clone)]
pub(crate) struct AccessorContext {
    pub attribute: Arc<str>,
    pub locale: Locale,
    pub name: Arc<str>,
    pub metrics: Arc<AccessorMetrics>,
}

impl AccessorContext {
    /// Options to forward to the base accessor.
    ///
    /// A caller-supplied `locale` that differs from the accessor's locale is
    /// discarded with a warning.
    fn default_options(&self, options: &Options) -> Options {
        if let Some(requested) = &options.locale {
            if requested != &self.locale {
                self.metrics.record_locale_conflict();
                warn!(
                    attribute = %self.attribute,
                    locale = %self.locale,
                    ignored = %requested,
                    "{}",
                    LOCALE_CONFLICT_WARNING
                );
            }
        }
        options.with_forced_locale(&self.locale)
    }

    fn missing_previous(&self) -> anyhow::Error {
        DispatchError::NoPreviousDefinition {
            name: self.name.to_string(),
        }
        .into()
    }
}

pub(crate) fn reader<M>(ctx: AccessorContext, previous: Option<Arc<ReadFn<M>>>) -> Operation<M>
where
    M: BaseAccessor + 'static,
{
    Operation::Reader(Arc::new(move |model: &M, options: &Options| -> Result<Value> {
        if options.use_super {
            ctx.metrics.record_super_dispatch();
            let previous = previous.as_ref().ok_or_else(|| ctx.missing_previous())?;
            return previous(model, &options.without_super());
        }
        ctx.metrics.record_default_dispatch();
        model.get(&ctx.attribute, &ctx.default_options(options))
    }))
}

pub(crate) fn predicate<M>(
    ctx: AccessorContext,
    previous: Option<Arc<PredicateFn<M>>>,
) -> Operation<M>
where
    M: BaseAccessor + 'static,
{
    Operation::Predicate(Arc::new(move |model: &M, options: &Options| -> Result<bool> {
        if options.use_super {
            ctx.metrics.record_super_dispatch();
            let previous = previous.as_ref().ok_or_else(|| ctx.missing_previous())?;
            return previous(model, &options.without_super());
        }
        ctx.metrics.record_default_dispatch();
        model.predicate(&ctx.attribute, &ctx.default_options(options))
    }))
}

pub(crate) fn writer<M>(ctx: AccessorContext, previous: Option<Arc<WriteFn<M>>>) -> Operation<M>
where
    M: BaseAccessor + 'static,
{
    Operation::Writer(Arc::new(
        move |model: &mut M, value: Value, options: &Options| -> Result<()> {
            if options.use_super {
                ctx.metrics.record_super_dispatch();
                let previous = previous.as_ref().ok_or_else(|| ctx.missing_previous())?;
                // Previous writers take the value only
                return previous(model, value, &Options::default());
            }
            ctx.metrics.record_default_dispatch();
            model.set(&ctx.attribute, value, &ctx.default_options(options))
        },
    ))
}
