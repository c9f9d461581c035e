//! Accessor table: named operations installed onto a model type.
//!
//! The table plays the part of a model class. Operations are installed by
//! name at setup time and looked up by name at call time. Asking for a name
//! that was never installed fails with [`DispatchError::UnknownOperation`].

use crate::accessors::Options;
use crate::i18n::AccessorMetrics;
use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub type ReadFn<M> = dyn Fn(&M, &Options) -> Result<Value> + Send + Sync;
pub type PredicateFn<M> = dyn Fn(&M, &Options) -> Result<bool> + Send + Sync;
pub type WriteFn<M> = dyn Fn(&mut M, Value, &Options) -> Result<()> + Send + Sync;

/// Failures raised by the table's own call dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("undefined operation `{name}`")]
    UnknownOperation { name: String },

    #[error("no previous definition of `{name}` to delegate to")]
    NoPreviousDefinition { name: String },
}

/// A callable operation.
pub enum Operation<M> {
    Reader(Arc<ReadFn<M>>),
    Predicate(Arc<PredicateFn<M>>),
    Writer(Arc<WriteFn<M>>),
}

impl<M> Clone for Operation<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Reader(f) => Self::Reader(Arc::clone(f)),
            Self::Predicate(f) => Self::Predicate(Arc::clone(f)),
            Self::Writer(f) => Self::Writer(Arc::clone(f)),
        }
    }
}

impl<M> fmt::Debug for Operation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl<M> Operation<M> {
    /// Get the operation kind as a lowercase word.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reader(_) => "reader",
            Self::Predicate(_) => "predicate",
            Self::Writer(_) => "writer",
        }
    }

    /// Get the reader, if this is one.
    pub fn into_reader(self) -> Option<Arc<ReadFn<M>>> {
        match self {
            Self::Reader(f) => Some(f),
            _ => None,
        }
    }

    /// Get the predicate, if this is one.
    pub fn into_predicate(self) -> Option<Arc<PredicateFn<M>>> {
        match self {
            Self::Predicate(f) => Some(f),
            _ => None,
        }
    }

    /// Get the writer, if this is one.
    pub fn into_writer(self) -> Option<Arc<WriteFn<M>>> {
        match self {
            Self::Writer(f) => Some(f),
            _ => None,
        }
    }
}

/// Where a definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Defined directly on the table
    Defined,
    /// Installed by [`LocaleAccessors`](crate::accessors::LocaleAccessors)
    LocaleAccessor,
}

struct Definition<M> {
    operation: Operation<M>,
    origin: Origin,
    // Definition this one replaced, captured at installation time
    previous: Option<Operation<M>>,
}

/// Name → operation table for one model type.
pub struct AccessorTable<M> {
    definitions: HashMap<String, Definition<M>>,
    revision: u64,
    metrics: Arc<AccessorMetrics>,
}

impl<M: 'static> AccessorTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            revision: 0,
            metrics: Arc::new(AccessorMetrics::new()),
        }
    }

    // ==================== Definition ====================

    /// Define a reader directly, replacing anything under `name`.
    pub fn define_reader<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&M, &Options) -> Result<Value> + Send + Sync + 'static,
    {
        self.define(name.into(), Operation::Reader(Arc::new(f)));
    }

    /// Define a predicate directly, replacing anything under `name`.
    pub fn define_predicate<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&M, &Options) -> Result<bool> + Send + Sync + 'static,
    {
        self.define(name.into(), Operation::Predicate(Arc::new(f)));
    }

    /// Define a writer directly, replacing anything under `name`.
    pub fn define_writer<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut M, Value, &Options) -> Result<()> + Send + Sync + 'static,
    {
        self.define(name.into(), Operation::Writer(Arc::new(f)));
    }

    fn define(&mut self, name: String, operation: Operation<M>) {
        self.insert(
            name,
            Definition {
                operation,
                origin: Origin::Defined,
                previous: None,
            },
        );
    }

    /// Install a locale accessor that replaced `previous`.
    pub(crate) fn install_locale_accessor(
        &mut self,
        name: String,
        operation: Operation<M>,
        previous: Option<Operation<M>>,
    ) {
        self.insert(
            name,
            Definition {
                operation,
                origin: Origin::LocaleAccessor,
                previous,
            },
        );
    }

    fn insert(&mut self, name: String, definition: Definition<M>) {
        self.revision += 1;
        self.definitions.insert(name, definition);
    }

    /// The definition a new locale accessor named `name` would delegate to.
    ///
    /// A locale accessor already installed under `name` is looked through,
    /// so installing the same accessor twice does not stack.
    pub(crate) fn previous_definition(&self, name: &str) -> Option<Operation<M>> {
        let definition = self.definitions.get(name)?;
        match definition.origin {
            Origin::Defined => Some(definition.operation.clone()),
            Origin::LocaleAccessor => definition.previous.clone(),
        }
    }

    // ==================== Introspection ====================

    /// Check whether an operation named `name` is installed.
    pub fn respond_to(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Get how the operation named `name` was installed.
    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.definitions.get(name).map(|definition| definition.origin)
    }

    /// Names of all installed operations, sorted.
    pub fn operation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of definitions and installations performed on this table.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn metrics(&self) -> &Arc<AccessorMetrics> {
        &self.metrics
    }

    // ==================== Dispatch ====================

    fn lookup(&self, name: &str) -> Result<&Operation<M>, DispatchError> {
        self.definitions
            .get(name)
            .map(|definition| &definition.operation)
            .ok_or_else(|| DispatchError::UnknownOperation {
                name: name.to_string(),
            })
    }

    /// Call the reader named `name`.
    pub fn read(&self, model: &M, name: &str, options: &Options) -> Result<Value> {
        match self.lookup(name)? {
            Operation::Reader(f) => f(model, options),
            _ => Err(unknown(name)),
        }
    }

    /// Call the predicate named `name`.
    pub fn query(&self, model: &M, name: &str, options: &Options) -> Result<bool> {
        match self.lookup(name)? {
            Operation::Predicate(f) => f(model, options),
            _ => Err(unknown(name)),
        }
    }

    /// Call the writer named `name`.
    pub fn write(&self, model: &mut M, name: &str, value: Value, options: &Options) -> Result<()> {
        match self.lookup(name)? {
            Operation::Writer(f) => f(model, value, options),
            _ => Err(unknown(name)),
        }
    }
}

fn unknown(name: &str) -> anyhow::Error {
    DispatchError::UnknownOperation {
        name: name.to_string(),
    }
    .into()
}

impl<M: 'static> Default for AccessorTable<M> {
    fn default() -> Self {
        Self::new()
    }
}
