//! Howard Core
//!
//! This crate contains the claim algebra: first-class, composable boolean checks
//! and the machinery that binds them to external state.
//!
//! ## Key Concepts
//!
//! - **Claim**: a checkable proposition wrapping a predicate or guard
//! - **Composite claims**: `And`, `Or` and `On`, produced by composition
//! - **Condition**: a claim paired with a reference into caller-owned state
//! - **Conditional**: a strategy-bound condition that re-checks on every call
//!
//! ## Pipeline
//!
//! ```text
//! predicate -> Claim -> (And | Or | On)* -> given(ref) -> Condition -> eager() | lazy()
//! ```
//!
//! Every stage keeps the `Checkable` contract. Evaluation is synchronous and
//! never cached; panics raised by user predicates or references propagate
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use howard_core::{Checkable, Claim};
//!
//! let is_positive = Claim::new(|v: &i64| *v > 0);
//! let is_even = Claim::new(|v: &i64| v % 2 == 0);
//! let even_positive = is_positive.and(is_even);
//!
//! assert!(even_positive.check(&4));
//! assert!(!even_positive.check(&3));
//! assert!(!even_positive.check(&-2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod composite;
pub mod condition;
pub mod on;
pub mod strategy;
pub mod structured;
pub mod traits;

// Re-exports for convenience
pub use claim::Claim;
pub use composite::{And, Or};
pub use condition::Condition;
pub use on::On;
pub use strategy::{Conditional, Eager, Lazy, Strategy};
pub use structured::Structured;
pub use traits::{BoxedClaim, Checkable, SharedClaim};
