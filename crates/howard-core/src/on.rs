//! Nested property checks

use crate::structured::Structured;
use crate::traits::Checkable;

/// A claim on a property of a value that satisfies a parent claim
///
/// `check` runs the parent first. Only when it passes is the property at
/// `path` read and handed to the nested claim. An absent property is handed
/// over as the shape's stand-in (`null` for JSON), so the nested claim decides;
/// shapes without a stand-in fail the check.
#[derive(Debug, Clone)]
pub struct On<P, C> {
    parent: P,
    path: String,
    claim: C,
}

impl<P, C> On<P, C> {
    /// Compose a parent claim with a claim on one of its properties
    pub fn new(parent: P, path: impl Into<String>, claim: C) -> Self {
        Self {
            parent,
            path: path.into(),
            claim,
        }
    }

    /// Get the parent claim
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// Get the property path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the claim applied to the property
    pub fn claim(&self) -> &C {
        &self.claim
    }
}

impl<V, P, C> Checkable<V> for On<P, C>
where
    V: Structured + ?Sized,
    P: Checkable<V>,
    C: Checkable<V::Field>,
{
    fn check(&self, value: &V) -> bool {
        if !self.parent.check(value) {
            return false;
        }

        match value.field(&self.path).or_else(|| value.missing()) {
            Some(property) => self.claim.check(property),
            None => false,
        }
    }
}
