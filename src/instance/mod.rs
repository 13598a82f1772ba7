//! Stateful objects and operation dispatch.
//!
//! An [`Instance`] pairs a shared [`Class`] with its own data and at most
//! one current state. Calls go through [`Instance::call`]:
//!
//! 1. an operation declared on the class itself always runs first,
//! 2. otherwise the current state (materialized from the starting state if
//!    needed) is consulted,
//! 3. otherwise the call fails with [`DispatchError::OperationNotFound`].
//!
//! # Example
//!
//! ```rust
//! use statecraft::class::Class;
//! use statecraft::instance::DispatchError;
//! use statecraft::json;
//!
//! let class = Class::<()>::builder("Stateful")
//!     .operation("helper", |_, _| Ok(json!(14)))
//!     .state("start", |s| s.operation("use_helper", |this, _| this.call("helper", &[])))
//!     .state("next", |s| s)
//!     .build()
//!     .unwrap();
//!
//! let mut obj = class.instantiate(());
//! assert_eq!(obj.current_state(), None);
//!
//! obj.change_state("start").unwrap();
//! assert_eq!(obj.call("use_helper", &[]).unwrap(), json!(14));
//!
//! obj.change_state("next").unwrap();
//! assert!(matches!(
//!     obj.call("use_helper", &[]),
//!     Err(DispatchError::OperationNotFound { .. })
//! ));
//! ```

pub mod dispatch;
mod error;

pub use dispatch::Resolution;
pub use error::{DispatchError, InvalidStateError};

use crate::class::Class;
use crate::core::{StateDefinition, StateName};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// An object whose behavior depends on its current state.
pub struct Instance<T> {
    class: Arc<Class<T>>,
    current: Option<Arc<StateDefinition<T>>>,
    data: T,
}

impl<T> Instance<T> {
    /// Create an instance with no current state.
    pub fn new(class: Arc<Class<T>>, data: T) -> Self {
        Self {
            class,
            current: None,
            data,
        }
    }

    /// Get the class this instance was created from.
    pub fn class(&self) -> &Arc<Class<T>> {
        &self.class
    }

    /// Get the instance data.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get the instance data mutably.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consume the instance, returning its data.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Name of the current state.
    ///
    /// On an instance that has never transitioned, the class's starting
    /// state (if any) becomes current on this first query.
    pub fn current_state(&mut self) -> Option<StateName> {
        self.materialize();
        self.peek_state().cloned()
    }

    /// Name of the current state, without materializing the starting state.
    pub fn peek_state(&self) -> Option<&StateName> {
        self.current.as_ref().map(|definition| definition.name())
    }

    /// Check if `name` is the current state (materializing it first).
    pub fn is_in(&mut self, name: &str) -> bool {
        self.current_state().is_some_and(|current| current == name)
    }

    /// Make `name` the current state.
    ///
    /// Fails without touching the current state when no class in the
    /// ancestry declares `name`.
    pub fn change_state(&mut self, name: impl AsRef<str>) -> Result<(), InvalidStateError> {
        let name = name.as_ref();
        let Some(definition) = self.class.find_state(name).cloned() else {
            return Err(InvalidStateError {
                class: self.class.name().to_string(),
                name: name.to_string(),
            });
        };

        let previous = self.current.replace(definition);
        tracing::debug!(
            class = %self.class.name(),
            from = ?previous.as_ref().map(|definition| definition.name()),
            to = name,
            "state changed"
        );
        Ok(())
    }

    /// Dispatch `operation` with `args`.
    pub fn call(&mut self, operation: &str, args: &[Value]) -> Result<Value, DispatchError> {
        dispatch::dispatch(self, operation, args)
    }

    /// Whether a call to `operation` would find a behavior right now.
    pub fn responds_to(&mut self, operation: &str) -> bool {
        dispatch::resolve(self, operation).is_match()
    }

    pub(crate) fn materialize(&mut self) {
        if self.current.is_some() {
            return;
        }
        let start = self
            .class
            .starting_state()
            .and_then(|name| self.class.find_state(name.as_str()))
            .cloned();
        if let Some(definition) = start {
            tracing::trace!(
                class = %self.class.name(),
                state = %definition.name(),
                "starting state materialized"
            );
            self.current = Some(definition);
        }
    }

    pub(crate) fn current_definition(&self) -> Option<&Arc<StateDefinition<T>>> {
        self.current.as_ref()
    }
}

impl<T: Clone> Clone for Instance<T> {
    fn clone(&self) -> Self {
        Self {
            class: Arc::clone(&self.class),
            current: self.current.clone(),
            data: self.data.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Instance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name())
            .field("current_state", &self.peek_state())
            .field("data", &self.data)
            .finish()
    }
}
