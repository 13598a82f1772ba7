//! Classes: declared states, own operations, and inheritance.
//!
//! A [`Class`] plays the role of a type that mixes in the State pattern. It
//! is declared once through [`ClassBuilder`], may extend a base class over
//! the same data type, and is immutable afterwards, so a single
//! `Arc<Class<T>>` can be shared by every instance in the process.
//!
//! # Example
//!
//! ```rust
//! use statecraft::class::Class;
//! use statecraft::json;
//!
//! let stateful = Class::<()>::builder("Stateful")
//!     .operation("outer", |_, _| Ok(json!(10)))
//!     .state("start", |s| {
//!         s.operation("add", |_, args| Ok(json!(args.i64(0)? + args.i64(1)?)))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let sub = Class::builder("SubState")
//!     .extends(&stateful)
//!     .state("another", |s| {
//!         s.operation("add", |_, args| Ok(json!(args.i64(0)? % args.i64(1)?)))
//!     })
//!     .starting_state("another")
//!     .build()
//!     .unwrap();
//!
//! assert!(sub.has_state("start"));
//! assert!(!stateful.has_state("another"));
//! assert_eq!(sub.declaring_class("start").unwrap().name(), "Stateful");
//! ```

mod builder;
mod cache;
mod error;
mod table;

pub use builder::{ClassBuilder, StateBuilder};
pub use cache::StateCache;
pub use error::BuildError;
pub use table::StateTable;

use crate::core::{Behavior, Operations, StateDefinition, StateName};
use crate::instance::Instance;
use std::fmt;
use std::sync::Arc;

/// A declared class of stateful objects holding data of type `T`.
pub struct Class<T> {
    name: String,
    base: Option<Arc<Class<T>>>,
    declared: StateTable<T>,
    operations: Operations<T>,
    cache: StateCache<T>,
    starting_state: Option<StateName>,
}

impl<T: 'static> Class<T> {
    /// Start declaring a class named `name`.
    pub fn builder(name: impl Into<String>) -> ClassBuilder<T> {
        ClassBuilder::new(name)
    }

    /// Create an instance with no current state.
    pub fn instantiate(self: &Arc<Self>, data: T) -> Instance<T> {
        Instance::new(Arc::clone(self), data)
    }
}

impl<T> Class<T> {
    /// Get the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the direct base class, if any.
    pub fn base(&self) -> Option<&Arc<Class<T>>> {
        self.base.as_ref()
    }

    /// This class, then each base class in turn.
    pub fn ancestors(&self) -> Ancestors<'_, T> {
        Ancestors { next: Some(self) }
    }

    /// Whether `other` is this class or one of its bases.
    pub fn is_a(&self, other: &Class<T>) -> bool {
        self.ancestors().any(|class| std::ptr::eq(class, other))
    }

    /// The nearest class in the ancestry that declares `state` itself.
    pub fn declaring_class(&self, state: &str) -> Option<&Class<T>> {
        self.ancestors().find(|class| class.declared.contains(state))
    }

    /// Resolve a state by name through the flattened ancestry.
    pub fn find_state(&self, name: &str) -> Option<&Arc<StateDefinition<T>>> {
        self.cache.get(name)
    }

    /// Check if `name` resolves anywhere in the ancestry.
    pub fn has_state(&self, name: &str) -> bool {
        self.cache.contains(name)
    }

    /// Every state name reachable on this class, sorted.
    pub fn state_names(&self) -> Vec<&StateName> {
        self.cache.names()
    }

    /// States declared on this class only, without its bases.
    pub fn declared_states(&self) -> &StateTable<T> {
        &self.declared
    }

    /// Own (non-state) operation, inherited ones included.
    pub fn operation(&self, name: &str) -> Option<&Behavior<T>> {
        self.operations.get(name)
    }

    /// Check if an own operation named `name` exists.
    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains(name)
    }

    /// Get all own operations, inherited ones included.
    pub fn operations(&self) -> &Operations<T> {
        &self.operations
    }

    /// Get the starting state, declared here or inherited.
    pub fn starting_state(&self) -> Option<&StateName> {
        self.starting_state.as_ref()
    }
}

impl<T> fmt::Debug for Class<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|base| base.name()))
            .field("states", &self.cache)
            .field("operations", &self.operations)
            .field("starting_state", &self.starting_state)
            .finish()
    }
}

/// Iterator over a class and its bases, most-derived first.
pub struct Ancestors<'a, T> {
    next: Option<&'a Class<T>>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a Class<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base.as_deref();
        Some(current)
    }
}
