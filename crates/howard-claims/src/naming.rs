//! Naming rules that turn function names into claim names
//!
//! Relations (plain predicates) read as propositions: `isEmpty` becomes
//! `IsEmpty`. Guards read as types: `isUser` becomes `aUser` and `isObject`
//! becomes `anObject`. Both conventions map `hasX` to `HasX` and capitalize
//! anything else.

use serde::{Deserialize, Serialize};

/// The naming convention applied to a source function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Predicates describing a relation or proposition
    Relation,
    /// Guards narrowing a value to a type
    Guard,
}

impl Convention {
    /// Get the convention name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Relation => "relation",
            Convention::Guard => "guard",
        }
    }

    /// Map a source function name to a claim name under this convention
    pub fn claim_name(&self, name: &str) -> String {
        match self {
            Convention::Relation => name_for_predicate(name),
            Convention::Guard => name_for_guard(name),
        }
    }
}

/// Transform a predicate function name into a claim name
///
/// # Examples
///
/// ```
/// use howard_claims::name_for_predicate;
///
/// assert_eq!(name_for_predicate("isEmpty"), "IsEmpty");
/// assert_eq!(name_for_predicate("hasLength"), "HasLength");
/// assert_eq!(name_for_predicate("custom"), "Custom");
/// ```
pub fn name_for_predicate(name: &str) -> String {
    if let Some(rest) = strip_non_empty(name, "is") {
        return format!("Is{}", rest);
    }
    if let Some(rest) = strip_non_empty(name, "has") {
        return format!("Has{}", rest);
    }
    capitalize(name)
}

/// Transform a type guard function name into a claim name
///
/// Uses `an` before `a`, `e`, `i` and `o`. `u` takes `a` because it usually
/// sounds like "yoo".
///
/// # Examples
///
/// ```
/// use howard_claims::name_for_guard;
///
/// assert_eq!(name_for_guard("isUser"), "aUser");
/// assert_eq!(name_for_guard("isObject"), "anObject");
/// assert_eq!(name_for_guard("hasCart"), "HasCart");
/// ```
pub fn name_for_guard(name: &str) -> String {
    if let Some(rest) = strip_non_empty(name, "is") {
        let article = match rest.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a' | 'e' | 'i' | 'o') => "an",
            _ => "a",
        };
        return format!("{}{}", article, rest);
    }
    if let Some(rest) = strip_non_empty(name, "has") {
        return format!("Has{}", rest);
    }
    capitalize(name)
}

/// Strip `prefix` only when something is left after it
fn strip_non_empty<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
