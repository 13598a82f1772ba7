//! Declarative construction of classes and their states.

use super::cache::StateCache;
use super::error::BuildError;
use super::table::StateTable;
use super::Class;
use crate::core::{Args, Behavior, Operations, StateDefinition, StateName};
use crate::instance::{DispatchError, Instance};
use serde_json::Value;
use std::iter;
use std::sync::Arc;

/// Builder for one state's behavior set, handed to [`ClassBuilder::state`].
pub struct StateBuilder<T> {
    name: StateName,
    operations: Operations<T>,
    empty_operation_name: bool,
}

impl<T: 'static> StateBuilder<T> {
    fn new(name: StateName) -> Self {
        Self {
            name,
            operations: Operations::new(),
            empty_operation_name: false,
        }
    }

    /// Add an operation reachable while this state is current.
    pub fn operation<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Instance<T>, Args<'_>) -> Result<Value, DispatchError> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            self.empty_operation_name = true;
            return self;
        }
        self.operations.insert(name, Behavior::new(body));
        self
    }
}

/// Fluent builder for a [`Class`].
///
/// Errors are collected while declaring and reported by [`build`](Self::build).
pub struct ClassBuilder<T> {
    name: String,
    base: Option<Arc<Class<T>>>,
    operations: Operations<T>,
    states: StateTable<T>,
    starting_state: Option<StateName>,
    error: Option<BuildError>,
}

impl<T: 'static> ClassBuilder<T> {
    /// Create a builder for a class named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            operations: Operations::new(),
            states: StateTable::new(),
            starting_state: None,
            error: None,
        }
    }

    /// Inherit states, own operations and the starting state of `base`.
    pub fn extends(mut self, base: &Arc<Class<T>>) -> Self {
        self.base = Some(Arc::clone(base));
        self
    }

    /// Declare an operation on the class itself, outside any state.
    ///
    /// Own operations always take precedence over state operations of the
    /// same name.
    pub fn operation<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Instance<T>, Args<'_>) -> Result<Value, DispatchError> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            self.record(BuildError::EmptyOperationName {
                class: self.name.clone(),
            });
            return self;
        }
        self.operations.insert(name, Behavior::new(body));
        self
    }

    /// Declare a state and its operations.
    ///
    /// Declaring the same name twice on one class keeps the later
    /// declaration.
    pub fn state<F>(mut self, name: impl AsRef<str>, declare: F) -> Self
    where
        F: FnOnce(StateBuilder<T>) -> StateBuilder<T>,
    {
        let name = StateName::new(name);
        if name.is_empty() {
            self.record(BuildError::EmptyStateName {
                class: self.name.clone(),
            });
            return self;
        }

        let state = declare(StateBuilder::new(name));
        if state.empty_operation_name {
            self.record(BuildError::EmptyOperationName {
                class: self.name.clone(),
            });
            return self;
        }

        let definition = StateDefinition::new(state.name, state.operations);
        if let Some(previous) = self.states.declare(definition) {
            tracing::warn!(
                class = %self.name,
                state = %previous.name(),
                "state redeclared, replacing earlier declaration"
            );
        }
        self
    }

    /// Name the state a fresh instance resolves to on first query.
    pub fn starting_state(mut self, name: impl AsRef<str>) -> Self {
        self.starting_state = Some(StateName::new(name));
        self
    }

    /// Finish the declaration and flatten the ancestry into the state cache.
    pub fn build(self) -> Result<Arc<Class<T>>, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyClassName);
        }
        if let Some(error) = self.error {
            return Err(error);
        }

        let ancestry = iter::once(&self.states).chain(
            self.base
                .iter()
                .flat_map(|base| base.ancestors().map(Class::declared_states)),
        );
        let cache = StateCache::flatten(ancestry);

        let mut operations = self.operations;
        if let Some(base) = &self.base {
            operations.fill_from(&base.operations);
        }

        let starting_state = self
            .starting_state
            .or_else(|| self.base.as_ref().and_then(|base| base.starting_state().cloned()));

        if let Some(start) = &starting_state {
            if !cache.contains(start.as_str()) {
                return Err(BuildError::UnknownStartingState {
                    class: self.name,
                    state: start.to_string(),
                });
            }
        }

        tracing::debug!(
            class = %self.name,
            states = cache.len(),
            operations = operations.len(),
            "class declared"
        );

        Ok(Arc::new(Class {
            name: self.name,
            base: self.base,
            declared: self.states,
            operations,
            cache,
            starting_state,
        }))
    }

    fn record(&mut self, error: BuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
