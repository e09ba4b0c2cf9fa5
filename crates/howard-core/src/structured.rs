//! Structural access for values that have named properties

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// A value whose properties can be looked up by path
///
/// Implemented for the shapes `On` navigates. A missing property is `None`;
/// the lookup itself never panics.
pub trait Structured {
    /// Type of the values stored at each path
    type Field: ?Sized;

    /// Look up the property at `path`
    fn field(&self, path: &str) -> Option<&Self::Field>;

    /// The value that stands in for an absent property
    ///
    /// Shapes whose field type can express absence (JSON `null`) return it;
    /// the default is `None`, for shapes that cannot.
    fn missing(&self) -> Option<&Self::Field> {
        None
    }
}

static NULL: Value = Value::Null;

/// Objects are keyed by name and arrays by decimal index. Scalars and `null`
/// have no properties.
impl Structured for Value {
    type Field = Value;

    fn field(&self, path: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(path),
            Value::Array(items) => path.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        }
    }

    fn missing(&self) -> Option<&Value> {
        Some(&NULL)
    }
}

impl Structured for Map<String, Value> {
    type Field = Value;

    fn field(&self, path: &str) -> Option<&Value> {
        self.get(path)
    }

    fn missing(&self) -> Option<&Value> {
        Some(&NULL)
    }
}

impl<T, S: BuildHasher> Structured for HashMap<String, T, S> {
    type Field = T;

    fn field(&self, path: &str) -> Option<&T> {
        self.get(path)
    }
}

impl<T> Structured for BTreeMap<String, T> {
    type Field = T;

    fn field(&self, path: &str) -> Option<&T> {
        self.get(path)
    }
}
