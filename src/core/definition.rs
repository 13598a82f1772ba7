//! State definitions: a named, immutable bundle of behaviors.

use super::behavior::{Behavior, Operations};
use super::name::StateName;
use std::fmt;

/// The behaviors that become reachable while an object is in one state.
///
/// Definitions are built once when their class is declared and shared,
/// read-only, by every instance that enters the state. Per-object data
/// belongs to the instance, never to the definition.
pub struct StateDefinition<T> {
    name: StateName,
    operations: Operations<T>,
}

impl<T> StateDefinition<T> {
    /// Create a definition from its name and behavior set.
    pub fn new(name: StateName, operations: Operations<T>) -> Self {
        Self { name, operations }
    }

    /// Get the state name this definition was declared under.
    pub fn name(&self) -> &StateName {
        &self.name
    }

    /// Get every operation of this state.
    pub fn operations(&self) -> &Operations<T> {
        &self.operations
    }

    /// Look up one operation of this state.
    pub fn behavior(&self, operation: &str) -> Option<&Behavior<T>> {
        self.operations.get(operation)
    }

    /// Check if this state declares `operation`.
    pub fn defines(&self, operation: &str) -> bool {
        self.operations.contains(operation)
    }
}

impl<T> fmt::Debug for StateDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("name", &self.name)
            .field("operations", &self.operations)
            .finish()
    }
}
