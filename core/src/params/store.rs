//! Dynamic parameter store.
//!
//! In-memory map from string keys to values of any type. Values go in
//! untyped and come back out either untyped (`get`) or checked against a
//! requested type (`try_get`, `get_as`, `require`). Lookups never fault:
//! a missing key or a type mismatch is an ordinary negative result.
//!
//! The store does no locking. Writes take `&mut self`; callers sharing a
//! store between threads must wrap it in their own lock.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use super::errors::ParamError;
use super::value::ParamValue;


/// Named parameters of arbitrary type, handed from a caller to a
/// rendering component. Key names and their expected types are agreed on
/// out of band; nothing here enforces a schema.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    data: HashMap<String, ParamValue>,
}

impl ParameterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        ParameterStore {
            data: HashMap::new(),
        }
    }

    /// Create an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        ParameterStore {
            data: HashMap::with_capacity(capacity),
        }
    }

    /// SET a value, replacing whatever `key` held before.
    ///
    /// The empty string is a valid key. The value keeps its exact Rust
    /// type, so `set("name", "Alice")` stores a `&'static str` while
    /// `set("name", String::from("Alice"))` stores a `String`.
    pub fn set<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.insert(key, ParamValue::new(value));
    }

    /// SET `key` to the null marker.
    pub fn set_null(&mut self, key: impl Into<String>) {
        self.insert(key, ParamValue::null());
    }

    /// SET a prebuilt slot, e.g. one taken from another store's snapshot.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        let key = key.into();
        let ty = value.type_name();
        let replaced = self.data.insert(key.clone(), value).is_some();
        trace!(key = %key, type_name = ty, replaced, "parameter set");
    }

    /// GET the untyped value for `key`.
    ///
    /// Returns `None` both when the key was never set and when it holds the
    /// null marker; the two cases look the same here. Use `contains_key`
    /// or `require` when the difference matters.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.data.get(key).filter(|v| !v.is_null())
    }

    /// Typed GET returning `(found, value)`.
    ///
    /// `found` is true only when `key` exists and holds exactly a `T`; the
    /// value is then a clone of the stored one. Otherwise the result is
    /// `(false, T::default())`.
    pub fn try_get<T: Any + Clone + Default>(&self, key: &str) -> (bool, T) {
        match self.get_as::<T>(key) {
            Some(v) => (true, v.clone()),
            None => (false, T::default()),
        }
    }

    /// Borrow the value for `key` if it holds exactly a `T`.
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        let value = self.data.get(key)?;
        let typed = value.downcast_ref::<T>();
        if typed.is_none() && !value.is_null() {
            debug!(
                key,
                expected = type_name::<T>(),
                found = value.type_name(),
                "parameter type mismatch"
            );
        }
        typed
    }

    /// Shared handle to the value for `key` if it holds exactly a `T`.
    pub fn get_shared<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.data.get(key).and_then(|v| v.downcast_arc::<T>())
    }

    /// Typed GET that reports why nothing was found.
    pub fn require<T: Any>(&self, key: &str) -> Result<&T, ParamError> {
        let value = self.data.get(key).ok_or_else(|| ParamError::Missing {
            key: key.to_string(),
        })?;
        if value.is_null() {
            return Err(ParamError::Null {
                key: key.to_string(),
            });
        }
        value.downcast_ref::<T>().ok_or_else(|| {
            debug!(
                key,
                expected = type_name::<T>(),
                found = value.type_name(),
                "parameter type mismatch"
            );
            ParamError::TypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
                found: value.type_name(),
            }
        })
    }

    /// True if `key` was set, including when it was set to null.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Independent copy of every entry, null entries included.
    ///
    /// The copy and the store can be changed without affecting each other.
    /// Values themselves are shared, so `ptr_eq` holds between a stored
    /// value and its counterpart in the snapshot.
    pub fn snapshot(&self) -> HashMap<String, ParamValue> {
        self.data.clone()
    }

    /// All keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
