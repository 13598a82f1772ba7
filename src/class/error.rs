//! Errors raised while declaring a class.

use thiserror::Error;

/// Errors that can occur when building a class.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Class name must not be empty")]
    EmptyClassName,

    #[error("State declared on {class} with an empty name")]
    EmptyStateName { class: String },

    #[error("Operation declared on {class} with an empty name")]
    EmptyOperationName { class: String },

    #[error("Starting state {state} of {class} is not declared in its ancestry")]
    UnknownStartingState { class: String, state: String },
}
