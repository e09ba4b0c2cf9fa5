//! Howard Claims
//!
//! Turns named predicates and type guards into a registry of first-class
//! claims, following Howard's naming conventions.
//!
//! The crate provides:
//! - Naming rules for relations (`isEmpty` -> `IsEmpty`) and guards
//!   (`isUser` -> `aUser`, `isObject` -> `anObject`)
//! - The `claims` factory and the `Claims` registry it returns
//! - Configuration for name collisions, loadable from TOML
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use howard_claims::{claims, ClaimsInput};
//! use howard_core::{Checkable, Conditional};
//!
//! # fn main() -> Result<(), howard_claims::ClaimsError> {
//! let registry = claims(
//!     ClaimsInput::new()
//!         .predicate("isPositive", |v: &i64| *v > 0)
//!         .predicate("isEven", |v: &i64| v % 2 == 0),
//! )?;
//!
//! let state = Cell::new(4);
//! let conditional = registry
//!     .claim("IsPositive")?
//!     .given(|| state.get())
//!     .eager()
//!     .and(registry.claim("IsEven")?);
//!
//! assert!(conditional.evaluate());
//! state.set(3);
//! assert!(!conditional.evaluate());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [claims]
//! on_collision = "replace"   # or "reject"
//! allow_empty_names = false
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod factory;
mod naming;

pub use config::{ClaimsConfig, CollisionPolicy};
pub use error::{ClaimsError, Result};
pub use factory::{claims, Claims, ClaimsInput};
pub use naming::{name_for_guard, name_for_predicate, Convention};
