//! Flattened, per-class index of every state reachable through the ancestry.

use super::table::StateTable;
use crate::core::{StateDefinition, StateName};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Resolved state lookup for one concrete class.
///
/// Built once when the class is declared by walking its ancestry
/// most-derived first; the first table declaring a name wins. After that
/// every lookup is a single hash probe.
pub struct StateCache<T> {
    resolved: HashMap<StateName, Arc<StateDefinition<T>>>,
}

impl<T> StateCache<T> {
    /// Flatten `tables`, which must be ordered most-derived first.
    pub fn flatten<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'a StateTable<T>>,
        T: 'a,
    {
        let mut resolved = HashMap::new();
        for table in tables {
            for (name, definition) in table.iter() {
                resolved
                    .entry(name.clone())
                    .or_insert_with(|| Arc::clone(definition));
            }
        }
        Self { resolved }
    }

    /// Look up a state by name. Misses are not an error here; callers decide.
    pub fn get(&self, name: &str) -> Option<&Arc<StateDefinition<T>>> {
        self.resolved.get(name)
    }

    /// Check if `name` resolves anywhere in the ancestry.
    pub fn contains(&self, name: &str) -> bool {
        self.resolved.contains_key(name)
    }

    /// Every resolvable state name, sorted.
    pub fn names(&self) -> Vec<&StateName> {
        let mut names: Vec<&StateName> = self.resolved.keys().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

impl<T> fmt::Debug for StateCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
