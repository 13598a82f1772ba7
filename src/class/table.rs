//! Per-class table of declared states.

use crate::core::{StateDefinition, StateName};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// States declared directly on one class, not counting its bases.
pub struct StateTable<T> {
    states: HashMap<StateName, Arc<StateDefinition<T>>>,
}

impl<T> StateTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register a definition under its own name. Last write wins; the
    /// replaced definition is returned.
    pub fn declare(
        &mut self,
        definition: StateDefinition<T>,
    ) -> Option<Arc<StateDefinition<T>>> {
        let name = definition.name().clone();
        self.states.insert(name, Arc::new(definition))
    }

    /// Look up a state declared on this class.
    pub fn get(&self, name: &str) -> Option<&Arc<StateDefinition<T>>> {
        self.states.get(name)
    }

    /// Check if this class itself declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Declared names in sorted order.
    pub fn names(&self) -> Vec<&StateName> {
        let mut names: Vec<&StateName> = self.states.keys().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&StateName, &Arc<StateDefinition<T>>)> {
        self.states.iter()
    }
}

impl<T> Default for StateTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StateTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
