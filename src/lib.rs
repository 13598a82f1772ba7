//! Statecraft: the State pattern as a reusable runtime mechanism
//!
//! A [`Class`] declares named states, each carrying its own operations.
//! Every [`Instance`] of the class tracks one current state, and calls to
//! operations the class does not define itself are routed to that state.
//! Switching state switches behavior, with no branching in user code.
//!
//! # Core Concepts
//!
//! - **Class**: declared once, immutable, shareable across threads
//! - **State**: a named bundle of operations, inherited by subclasses
//! - **Dispatch**: own operations first, current state second, error otherwise
//!
//! # Example
//!
//! ```rust
//! use statecraft::{json, Class, DispatchError, InvalidStateError};
//!
//! let stateful = Class::<()>::builder("Stateful")
//!     .operation("outer", |_, _| Ok(json!(10)))
//!     .state("start", |s| {
//!         s.operation("add", |_, args| Ok(json!(args.i64(0)? + args.i64(1)?)))
//!     })
//!     .state("next", |s| {
//!         s.operation("add", |_, args| Ok(json!(args.i64(0)? - args.i64(1)?)))
//!             // unreachable: the class-level `outer` always wins
//!             .operation("outer", |_, _| Ok(json!(20)))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut obj = stateful.instantiate(());
//!
//! obj.change_state("start").unwrap();
//! assert_eq!(obj.call("add", &[json!(2), json!(4)]).unwrap(), json!(6));
//!
//! obj.change_state("next").unwrap();
//! assert_eq!(obj.call("add", &[json!(2), json!(4)]).unwrap(), json!(-2));
//! assert_eq!(obj.call("outer", &[]).unwrap(), json!(10));
//!
//! let err: InvalidStateError = obj.change_state("fail_state").unwrap_err();
//! assert_eq!(err.name, "fail_state");
//! assert!(obj.is_in("next"));
//!
//! assert!(matches!(
//!     obj.call("missing", &[]),
//!     Err(DispatchError::OperationNotFound { .. })
//! ));
//! ```

pub mod class;
pub mod core;
pub mod instance;

// Re-export commonly used types
pub use class::{BuildError, Class, ClassBuilder};
pub use crate::core::{Args, StateName};
pub use instance::{DispatchError, Instance, InvalidStateError};
pub use serde_json::{json, Value};
