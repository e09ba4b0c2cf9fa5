//! Logical composition of claims
//!
//! `And` and `Or` own both operands and evaluate left before right, skipping
//! the right operand once the result is known.

use crate::traits::Checkable;

/// Logical AND of two claims
#[derive(Debug, Clone)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Compose two claims
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Get the left operand
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Get the right operand
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<V, L, R> Checkable<V> for And<L, R>
where
    V: ?Sized,
    L: Checkable<V>,
    R: Checkable<V>,
{
    fn check(&self, value: &V) -> bool {
        self.left.check(value) && self.right.check(value)
    }
}

/// Logical OR of two claims
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Compose two claims
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Get the left operand
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Get the right operand
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<V, L, R> Checkable<V> for Or<L, R>
where
    V: ?Sized,
    L: Checkable<V>,
    R: Checkable<V>,
{
    fn check(&self, value: &V) -> bool {
        self.left.check(value) || self.right.check(value)
    }
}
