//! Type-erased behaviors and named behavior sets.

use super::args::Args;
use crate::instance::{DispatchError, Instance};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type BehaviorFn<T> =
    dyn Fn(&mut Instance<T>, Args<'_>) -> Result<Value, DispatchError> + Send + Sync;

/// A named operation's executable body.
///
/// The first argument is the object the operation was dispatched on. State
/// behaviors use it to reach the object's own operations and data.
pub struct Behavior<T> {
    body: Arc<BehaviorFn<T>>,
}

impl<T: 'static> Behavior<T> {
    /// Wrap a closure as a behavior.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&mut Instance<T>, Args<'_>) -> Result<Value, DispatchError> + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
        }
    }
}

impl<T> Behavior<T> {
    /// Run the behavior against `receiver`.
    pub fn invoke(
        &self,
        receiver: &mut Instance<T>,
        args: Args<'_>,
    ) -> Result<Value, DispatchError> {
        (self.body)(receiver, args)
    }
}

impl<T> Clone for Behavior<T> {
    fn clone(&self) -> Self {
        Self {
            body: Arc::clone(&self.body),
        }
    }
}

impl<T> fmt::Debug for Behavior<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Behavior(..)")
    }
}

/// A set of behaviors keyed by operation name.
///
/// Inserting a name that already exists replaces the earlier behavior.
pub struct Operations<T> {
    entries: HashMap<String, Behavior<T>>,
}

impl<T> Operations<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a behavior, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        behavior: Behavior<T>,
    ) -> Option<Behavior<T>> {
        self.entries.insert(name.into(), behavior)
    }

    /// Look up a behavior by operation name.
    pub fn get(&self, name: &str) -> Option<&Behavior<T>> {
        self.entries.get(name)
    }

    /// Check if `name` is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Operation names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Behavior<T>)> {
        self.entries.iter().map(|(name, behavior)| (name.as_str(), behavior))
    }

    /// Copy in every entry of `other` whose name is not already present.
    pub(crate) fn fill_from(&mut self, other: &Operations<T>) {
        for (name, behavior) in other.iter() {
            if !self.contains(name) {
                self.entries.insert(name.to_string(), behavior.clone());
            }
        }
    }
}

impl<T> Default for Operations<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Operations<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for Operations<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
