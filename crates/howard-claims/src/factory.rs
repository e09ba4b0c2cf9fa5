//! The claims factory and the registry it produces

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;

use howard_core::{Claim, SharedClaim};
use tracing::{debug, info, warn};

use crate::error::{ClaimsError, Result};
use crate::naming::Convention;
use crate::{ClaimsConfig, CollisionPolicy};

/// Named source functions waiting to become claims
///
/// Predicates (relations) are registered before guards, each group in the
/// order it was added.
///
/// # Examples
///
/// ```
/// use howard_claims::ClaimsInput;
///
/// let input = ClaimsInput::new()
///     .predicate("isPositive", |v: &i64| *v > 0)
///     .guard("isSmall", |v: &i64| *v < 10);
/// assert_eq!(input.len(), 2);
/// ```
pub struct ClaimsInput<V: ?Sized> {
    predicates: Vec<(String, SharedClaim<V>)>,
    guards: Vec<(String, SharedClaim<V>)>,
}

impl<V: ?Sized + 'static> ClaimsInput<V> {
    /// Create an empty input
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
            guards: Vec::new(),
        }
    }

    /// Add a relation-named predicate (`isEmpty` becomes `IsEmpty`)
    pub fn predicate<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        self.predicates
            .push((name.into(), Claim::new(predicate).into_shared()));
        self
    }

    /// Add a type-named guard (`isUser` becomes `aUser`)
    pub fn guard<F>(mut self, name: impl Into<String>, guard: F) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        self.guards.push((name.into(), Claim::new(guard).into_shared()));
        self
    }

    /// Number of source functions
    pub fn len(&self) -> usize {
        self.predicates.len() + self.guards.len()
    }

    /// Whether no source functions were added
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_sources(self) -> impl Iterator<Item = (Convention, String, SharedClaim<V>)> {
        let predicates = self
            .predicates
            .into_iter()
            .map(|(name, claim)| (Convention::Relation, name, claim));
        let guards = self
            .guards
            .into_iter()
            .map(|(name, claim)| (Convention::Guard, name, claim));
        predicates.chain(guards)
    }
}

impl<V: ?Sized + 'static> Default for ClaimsInput<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> fmt::Debug for ClaimsInput<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |entries: &[(String, SharedClaim<V>)]| -> Vec<String> {
            entries.iter().map(|(name, _)| name.clone()).collect()
        };
        f.debug_struct("ClaimsInput")
            .field("predicates", &names(self.predicates.as_slice()))
            .field("guards", &names(self.guards.as_slice()))
            .finish()
    }
}

/// A registry of claims keyed by generated claim name
///
/// Every entry is a shared claim, so it composes with the rest of the
/// algebra:
///
/// ```
/// use howard_claims::{claims, ClaimsInput};
/// use howard_core::Checkable;
///
/// # fn main() -> Result<(), howard_claims::ClaimsError> {
/// let registry = claims(
///     ClaimsInput::new()
///         .predicate("isPositive", |v: &i64| *v > 0)
///         .predicate("isEven", |v: &i64| v % 2 == 0),
/// )?;
///
/// let even_positive = registry.claim("IsPositive")?.and(registry.claim("IsEven")?);
/// assert!(even_positive.check(&4));
/// assert!(!even_positive.check(&3));
/// # Ok(())
/// # }
/// ```
pub struct Claims<V: ?Sized> {
    entries: BTreeMap<String, SharedClaim<V>>,
}

impl<V: ?Sized + 'static> Claims<V> {
    /// Build a registry from named source functions
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for an empty source name (unless allowed), and
    /// `DuplicateName` for a collision under `CollisionPolicy::Reject`.
    pub fn build(input: ClaimsInput<V>, config: &ClaimsConfig) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (convention, origin, claim) in input.into_sources() {
            if origin.is_empty() && !config.allow_empty_names {
                return Err(ClaimsError::InvalidName(format!(
                    "empty {} name",
                    convention.as_str()
                )));
            }

            let name = convention.claim_name(&origin);
            match entries.entry(name) {
                Entry::Vacant(slot) => {
                    debug!(
                        claim = %slot.key(),
                        origin = %origin,
                        convention = convention.as_str(),
                        "registered claim"
                    );
                    slot.insert(claim);
                }
                Entry::Occupied(mut slot) => match config.on_collision {
                    CollisionPolicy::Replace => {
                        warn!(
                            claim = %slot.key(),
                            origin = %origin,
                            "claim name already registered, replacing"
                        );
                        slot.insert(claim);
                    }
                    CollisionPolicy::Reject => {
                        return Err(ClaimsError::DuplicateName {
                            name: slot.key().clone(),
                            origin,
                        });
                    }
                },
            }
        }

        info!(count = entries.len(), "built claims registry");
        Ok(Self { entries })
    }
}

impl<V: ?Sized> Claims<V> {
    /// Get a claim by name
    pub fn get(&self, name: &str) -> Option<&SharedClaim<V>> {
        self.entries.get(name)
    }

    /// Get a shared handle to a claim by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownClaim` when nothing is registered under `name`.
    pub fn claim(&self, name: &str) -> Result<SharedClaim<V>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ClaimsError::UnknownClaim(name.to_string()))
    }

    /// Whether a claim is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered claim names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, claim)` pairs, in sorted name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, SharedClaim<V>> {
        self.entries.iter()
    }

    /// Number of registered claims
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, V: ?Sized> IntoIterator for &'a Claims<V> {
    type Item = (&'a String, &'a SharedClaim<V>);
    type IntoIter = btree_map::Iter<'a, String, SharedClaim<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V: ?Sized> fmt::Debug for Claims<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Transform named predicates and guards into claims
///
/// Uses the default configuration: later registrations replace earlier ones
/// with the same claim name.
///
/// # Examples
///
/// ```
/// use howard_claims::{claims, ClaimsInput};
/// use howard_core::Checkable;
///
/// # fn main() -> Result<(), howard_claims::ClaimsError> {
/// let registry = claims(
///     ClaimsInput::new()
///         .predicate("isEmpty", |s: &str| s.is_empty())
///         .guard("isUpper", |s: &str| s.chars().all(char::is_uppercase)),
/// )?;
///
/// assert!(registry.contains("IsEmpty"));
/// assert!(registry.claim("aUpper")?.check("ABC"));
/// # Ok(())
/// # }
/// ```
pub fn claims<V: ?Sized + 'static>(input: ClaimsInput<V>) -> Result<Claims<V>> {
    Claims::build(input, &ClaimsConfig::default())
}
