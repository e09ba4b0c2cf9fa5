//! Evaluation strategies that turn a condition into a conditional
//!
//! Both strategies read the reference and check the claim on every call.
//! They are kept as separate types so that a caching policy can be given to
//! one of them without changing the shape of the other.

use std::fmt;

use crate::composite::{And, Or};
use crate::traits::Checkable;

/// Tag identifying the strategy a conditional was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fetch from the reference, then check
    Eager,

    /// Check only when called
    Lazy,
}

impl Strategy {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Eager => "eager",
            Strategy::Lazy => "lazy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy-bound condition that can be evaluated with no arguments
///
/// Every call re-reads the reference; nothing is memoized.
pub trait Conditional {
    /// Read the reference and check the claim against the value it returns
    fn evaluate(&self) -> bool;

    /// The strategy this conditional was built with
    fn strategy(&self) -> Strategy;
}

impl<T: Conditional + ?Sized> Conditional for &T {
    fn evaluate(&self) -> bool {
        (**self).evaluate()
    }

    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }
}

impl<T: Conditional + ?Sized> Conditional for Box<T> {
    fn evaluate(&self) -> bool {
        (**self).evaluate()
    }

    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }
}

/// Conditional built with the eager strategy
///
/// Fetches the value from the reference before checking, each time.
#[derive(Clone)]
pub struct Eager<C, R> {
    claim: C,
    reference: R,
}

impl<C, R> Eager<C, R> {
    pub(crate) fn new(claim: C, reference: R) -> Self {
        Self { claim, reference }
    }

    /// Require `other` as well, against the same reference
    ///
    /// `other` must check the referenced value type:
    ///
    /// ```compile_fail
    /// use howard_core::{Checkable, Claim};
    ///
    /// let eager = Claim::new(|v: &i64| *v > 0).given(|| 1i64).eager();
    /// let _ = eager.and(42);
    /// ```
    pub fn and<O, U>(self, other: O) -> Eager<And<C, O>, R>
    where
        R: Fn() -> U,
        O: Checkable<U>,
    {
        Eager::new(And::new(self.claim, other), self.reference)
    }

    /// Accept `other` as an alternative, against the same reference
    pub fn or<O, U>(self, other: O) -> Eager<Or<C, O>, R>
    where
        R: Fn() -> U,
        O: Checkable<U>,
    {
        Eager::new(Or::new(self.claim, other), self.reference)
    }

    /// Turn this conditional into a plain closure
    pub fn into_fn<U>(self) -> impl Fn() -> bool
    where
        R: Fn() -> U,
        C: Checkable<U>,
    {
        move || self.evaluate()
    }
}

impl<C, R, U> Conditional for Eager<C, R>
where
    R: Fn() -> U,
    C: Checkable<U>,
{
    fn evaluate(&self) -> bool {
        let value = (self.reference)();
        self.claim.check(&value)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Eager
    }
}

impl<C: fmt::Debug, R> fmt::Debug for Eager<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eager")
            .field("claim", &self.claim)
            .finish_non_exhaustive()
    }
}

/// Conditional built with the lazy strategy
///
/// Only checks when called and assumes the value is available at that point.
#[derive(Clone)]
pub struct Lazy<C, R> {
    claim: C,
    reference: R,
}

impl<C, R> Lazy<C, R> {
    pub(crate) fn new(claim: C, reference: R) -> Self {
        Self { claim, reference }
    }

    /// Require `other` as well, against the same reference
    pub fn and<O, U>(self, other: O) -> Lazy<And<C, O>, R>
    where
        R: Fn() -> U,
        O: Checkable<U>,
    {
        Lazy::new(And::new(self.claim, other), self.reference)
    }

    /// Accept `other` as an alternative, against the same reference
    pub fn or<O, U>(self, other: O) -> Lazy<Or<C, O>, R>
    where
        R: Fn() -> U,
        O: Checkable<U>,
    {
        Lazy::new(Or::new(self.claim, other), self.reference)
    }

    /// Turn this conditional into a plain closure
    pub fn into_fn<U>(self) -> impl Fn() -> bool
    where
        R: Fn() -> U,
        C: Checkable<U>,
    {
        move || self.evaluate()
    }
}

impl<C, R, U> Conditional for Lazy<C, R>
where
    R: Fn() -> U,
    C: Checkable<U>,
{
    fn evaluate(&self) -> bool {
        let value = (self.reference)();
        self.claim.check(&value)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Lazy
    }
}

impl<C: fmt::Debug, R> fmt::Debug for Lazy<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("claim", &self.claim)
            .finish_non_exhaustive()
    }
}
