//! # condflow
//!
//! Fluent conditional pipelines with lazy, memoized boolean evaluation.
//!
//! ## Overview
//!
//! This library expresses conditional logic as chainable expressions instead
//! of imperative branches. It provides:
//!
//! - [`Conditional`]: an immutable pipeline over a boolean condition, with
//!   lazy `and`/`or`/`not` composition and branch operations that run side
//!   effects or produce values
//! - [`MemoizedBool`]: the underlying at-most-once-successful memoized lazy
//!   boolean, safe to share across threads
//! - [`CondValue`]: an optional-value container carrying the result of a
//!   conditional branch through further transformations
//!
//! Composition never evaluates anything; only a terminal operation
//! ([`value`](Conditional::value), [`then_run`](Conditional::then_run),
//! [`then_get`](Conditional::then_get), [`choose`](Conditional::choose))
//! forces the condition, at most once per pipeline.
//!
//! ## Example
//!
//! ```rust
//! use condflow::prelude::*;
//!
//! let message = Conditional::when_lazy(|| user_count() > 0)
//!     .and_lazy(|| maintenance_window().is_none())
//!     .then_run(|| println!("serving traffic"))
//!     .choose(|| "open", || "closed")
//!     .unwrap_or("unknown");
//!
//! assert_eq!(message, "open");
//! # fn user_count() -> usize { 12 }
//! # fn maintenance_window() -> Option<&'static str> { None }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the types used in everyday pipeline code.
///
/// # Usage
///
/// ```rust
/// use condflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::conditional::Conditional;
    pub use crate::memo::MemoizedBool;
    pub use crate::value::CondValue;
}

pub mod conditional;
pub mod memo;
pub mod value;

pub use conditional::Conditional;
pub use memo::MemoizedBool;
pub use value::CondValue;
