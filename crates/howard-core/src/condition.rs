//! Condition module - a claim bound to a reference into external state

use std::fmt;

use tracing::trace;

use crate::strategy::{Eager, Lazy, Strategy};

/// An immutable pairing of a claim with a reference function
///
/// The reference is a zero-argument accessor into state owned by the caller.
/// A condition evaluates nothing; it is turned into a callable
/// [`Conditional`](crate::Conditional) by choosing a strategy. Clone it to
/// materialize more than one conditional from the same pairing.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use howard_core::{Checkable, Claim, Conditional};
///
/// let state = Cell::new(5);
/// let is_positive = Claim::new(|v: &i64| *v > 0);
/// let conditional = is_positive.given(|| state.get()).eager();
///
/// assert!(conditional.evaluate());
/// state.set(-1);
/// assert!(!conditional.evaluate());
/// ```
#[derive(Clone)]
pub struct Condition<C, R> {
    claim: C,
    reference: R,
}

impl<C, R> Condition<C, R> {
    /// Pair a claim with a reference function
    pub fn new(claim: C, reference: R) -> Self {
        Self { claim, reference }
    }

    /// Get the bound claim
    pub fn claim(&self) -> &C {
        &self.claim
    }

    /// Materialize with the eager strategy
    pub fn eager(self) -> Eager<C, R> {
        trace!(strategy = %Strategy::Eager, "materializing condition");
        Eager::new(self.claim, self.reference)
    }

    /// Materialize with the lazy strategy
    pub fn lazy(self) -> Lazy<C, R> {
        trace!(strategy = %Strategy::Lazy, "materializing condition");
        Lazy::new(self.claim, self.reference)
    }
}

impl<C: fmt::Debug, R> fmt::Debug for Condition<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("claim", &self.claim)
            .finish_non_exhaustive()
    }
}
