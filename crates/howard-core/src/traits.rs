//! Trait definitions shared by every claim variant
//!
//! `Checkable` is the one contract that plain claims and composites satisfy.
//! The composition methods are provided, so any type that can `check` gets
//! `and`, `or`, `on` and `given` and stays closed under the algebra.

use std::rc::Rc;
use std::sync::Arc;

use crate::{And, Condition, On, Or, Structured};

/// A claim whose concrete type has been erased and which may be shared
///
/// This is what registries hand out.
pub type SharedClaim<V> = Rc<dyn Checkable<V>>;

/// A claim whose concrete type has been erased
pub type BoxedClaim<V> = Box<dyn Checkable<V>>;

/// A checkable proposition over values of type `V`
///
/// Implemented by [`Claim`](crate::Claim) and by every composite. The
/// composition methods require `Self: Sized`, so `dyn Checkable<V>` remains a
/// usable trait object; wrap it in `&`, `Box`, `Rc` or `Arc` to compose it.
pub trait Checkable<V: ?Sized> {
    /// Check whether `value` satisfies this claim
    fn check(&self, value: &V) -> bool;

    /// Compose with another claim using logical AND
    ///
    /// `other` is only checked when `self` passes.
    fn and<R>(self, other: R) -> And<Self, R>
    where
        Self: Sized,
        R: Checkable<V>,
    {
        And::new(self, other)
    }

    /// Compose with another claim using logical OR
    ///
    /// `other` is only checked when `self` fails.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        Self: Sized,
        R: Checkable<V>,
    {
        Or::new(self, other)
    }

    /// Check the property at `path` with `claim`, once `self` passes
    ///
    /// The property is never read when `self` fails, so malformed input
    /// yields `false` rather than a panic.
    fn on<C>(self, path: impl Into<String>, claim: C) -> On<Self, C>
    where
        Self: Sized,
        V: Structured,
        C: Checkable<V::Field>,
    {
        On::new(self, path, claim)
    }

    /// Bind this claim to a reference into external state
    ///
    /// Nothing is evaluated until the resulting condition is materialized
    /// and called.
    fn given<R>(self, reference: R) -> Condition<Self, R>
    where
        Self: Sized,
        V: Sized,
        R: Fn() -> V,
    {
        Condition::new(self, reference)
    }
}

impl<V: ?Sized, C: Checkable<V> + ?Sized> Checkable<V> for &C {
    fn check(&self, value: &V) -> bool {
        (**self).check(value)
    }
}

impl<V: ?Sized, C: Checkable<V> + ?Sized> Checkable<V> for Box<C> {
    fn check(&self, value: &V) -> bool {
        (**self).check(value)
    }
}

impl<V: ?Sized, C: Checkable<V> + ?Sized> Checkable<V> for Rc<C> {
    fn check(&self, value: &V) -> bool {
        (**self).check(value)
    }
}

impl<V: ?Sized, C: Checkable<V> + ?Sized> Checkable<V> for Arc<C> {
    fn check(&self, value: &V) -> bool {
        (**self).check(value)
    }
}
