//! Core building blocks shared by classes and instances.
//!
//! - `StateName`: case-sensitive state identifiers
//! - `Behavior` / `Operations`: type-erased operation bodies keyed by name
//! - `Args`: typed access to dynamic call arguments
//! - `StateDefinition`: the immutable behavior set of one state

mod args;
mod behavior;
mod definition;
mod name;

pub use args::Args;
pub use behavior::{Behavior, Operations};
pub use definition::StateDefinition;
pub use name::StateName;
