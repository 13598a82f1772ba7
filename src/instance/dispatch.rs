//! Two-stage operation resolution: own operations, then the current state.

use super::error::DispatchError;
use super::Instance;
use crate::core::{Args, Behavior, StateName};
use serde_json::Value;

/// Outcome of resolving one operation name against an instance.
#[derive(Debug)]
pub enum Resolution<T> {
    /// Declared on the class itself (or a base class, outside any state).
    Own(Behavior<T>),

    /// Declared by the current state.
    State {
        state: StateName,
        behavior: Behavior<T>,
    },

    /// Neither the class nor the current state declares it.
    NoMatch,
}

impl<T> Resolution<T> {
    /// Check if a behavior was found.
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Find the behavior `operation` would run on `instance`.
///
/// Own operations win over state operations of the same name. Only when no
/// own operation matches is the starting state materialized and consulted.
pub fn resolve<T>(instance: &mut Instance<T>, operation: &str) -> Resolution<T> {
    if let Some(behavior) = instance.class().operation(operation) {
        return Resolution::Own(behavior.clone());
    }

    instance.materialize();

    match instance.current_definition() {
        Some(definition) => match definition.behavior(operation) {
            Some(behavior) => Resolution::State {
                state: definition.name().clone(),
                behavior: behavior.clone(),
            },
            None => Resolution::NoMatch,
        },
        None => Resolution::NoMatch,
    }
}

pub(crate) fn dispatch<T>(
    instance: &mut Instance<T>,
    operation: &str,
    values: &[Value],
) -> Result<Value, DispatchError> {
    let args = Args::new(operation, values);

    match resolve(instance, operation) {
        Resolution::Own(behavior) => {
            tracing::trace!(
                class = %instance.class().name(),
                operation,
                "dispatch to own operation"
            );
            behavior.invoke(instance, args)
        }
        Resolution::State { state, behavior } => {
            tracing::trace!(
                class = %instance.class().name(),
                state = %state,
                operation,
                "dispatch to state operation"
            );
            behavior.invoke(instance, args)
        }
        Resolution::NoMatch => Err(DispatchError::OperationNotFound {
            operation: operation.to_string(),
            class: instance.class().name().to_string(),
            state: instance
                .peek_state()
                .map_or_else(|| "unset".to_string(), StateName::to_string),
        }),
    }
}
