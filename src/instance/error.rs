//! Errors raised by state transitions and operation dispatch.

use thiserror::Error;

/// A transition named a state that no class in the ancestry declares.
///
/// The instance's current state is unchanged when this is returned.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("No state defined with name {name} on {class}")]
pub struct InvalidStateError {
    pub class: String,
    pub name: String,
}

/// Errors returned by [`Instance::call`](super::Instance::call).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// Neither the object nor its current state defines the operation.
    #[error("undefined operation `{operation}` for {class} (current state: {state})")]
    OperationNotFound {
        operation: String,
        class: String,
        state: String,
    },

    /// A behavior attempted a transition to an undeclared state.
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),

    #[error("`{operation}` is missing argument {index}")]
    MissingArgument { operation: String, index: usize },

    #[error("argument {index} of `{operation}`: expected {expected}, got {found}")]
    ArgumentType {
        operation: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{operation}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        got: usize,
    },

    /// Failure reported by the behavior itself.
    #[error("`{operation}` failed: {message}")]
    Failed { operation: String, message: String },
}

impl DispatchError {
    /// Build a behavior-specific failure for `operation`.
    pub fn failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Check if dispatch found no behavior at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::OperationNotFound { .. })
    }
}
