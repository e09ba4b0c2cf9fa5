//! Claim module - the atomic checkable proposition

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::traits::{BoxedClaim, Checkable, SharedClaim};

/// A claim wrapping a single predicate or guard
///
/// Predicates and guards are the same thing at runtime: a `Fn(&V) -> bool`.
/// The claim owns its predicate and never mutates it; checking the same input
/// twice with no external change gives the same answer as long as the
/// predicate is pure.
///
/// # Examples
///
/// ```
/// use howard_core::{Checkable, Claim};
///
/// let is_positive = Claim::new(|v: &i64| *v > 0);
/// let is_zero = Claim::new(|v: &i64| *v == 0);
///
/// let non_negative = is_positive.or(is_zero);
/// assert!(non_negative.check(&0));
/// assert!(!non_negative.check(&-1));
/// ```
pub struct Claim<V: ?Sized, F> {
    predicate: F,
    _value: PhantomData<fn(&V) -> bool>,
}

impl<V: ?Sized, F> Claim<V, F>
where
    F: Fn(&V) -> bool,
{
    /// Wrap a predicate in a claim
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _value: PhantomData,
        }
    }

    /// Erase the predicate type behind a shared pointer
    pub fn into_shared(self) -> SharedClaim<V>
    where
        Self: 'static,
    {
        Rc::new(self)
    }

    /// Erase the predicate type behind a box
    pub fn boxed(self) -> BoxedClaim<V>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<V: ?Sized, F> Checkable<V> for Claim<V, F>
where
    F: Fn(&V) -> bool,
{
    fn check(&self, value: &V) -> bool {
        (self.predicate)(value)
    }
}

impl<V: ?Sized, F: Clone> Clone for Claim<V, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _value: PhantomData,
        }
    }
}

impl<V: ?Sized, F> fmt::Debug for Claim<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claim")
            .field("value", &std::any::type_name::<V>())
            .finish_non_exhaustive()
    }
}
