//! Type-erased value slot for the parameter store.
//!
//! A `ParamValue` is either the null marker or a shared
//! `Arc<dyn Any + Send + Sync>`. Clones share the underlying value, so two
//! clones of the same slot are `ptr_eq`.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;


/// Type name reported for the null marker.
pub const NULL_TYPE_NAME: &str = "null";


/// A single stored parameter value of arbitrary type.
#[derive(Clone)]
pub struct ParamValue {
    /// `None` is the null marker.
    inner: Option<Arc<dyn Any + Send + Sync>>,
    /// Rust type name captured at construction.
    type_name: &'static str,
}

impl ParamValue {
    /// Wrap a concrete value.
    ///
    /// The value keeps its exact type: `"text"` is stored as `&'static str`,
    /// not `String`, and typed lookups must ask for that same type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        ParamValue::from_arc(Arc::new(value))
    }

    /// Wrap a value that is already shared.
    ///
    /// The stored slot points at the same allocation as `value`.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        let inner: Arc<dyn Any + Send + Sync> = value;
        ParamValue {
            inner: Some(inner),
            type_name: type_name::<T>(),
        }
    }

    /// The null marker.
    pub fn null() -> Self {
        ParamValue {
            inner: None,
            type_name: NULL_TYPE_NAME,
        }
    }

    /// `Some(v)` becomes a value, `None` becomes the null marker.
    pub fn from_option<T: Any + Send + Sync>(value: Option<T>) -> Self {
        match value {
            Some(v) => ParamValue::new(v),
            None => ParamValue::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// True when the stored value is exactly a `T`. Always false for null.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is_some_and(|any| any.is::<T>())
    }

    /// Borrow the stored value as `T` if it has exactly that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().and_then(|any| any.downcast_ref::<T>())
    }

    /// Shared handle to the stored value if it has exactly type `T`.
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.inner
            .clone()
            .and_then(|arc| arc.downcast::<T>().ok())
    }

    /// Rust type name of the stored value, or `"null"`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Reference identity: true when both slots share one allocation.
    ///
    /// Two null markers are considered identical.
    pub fn ptr_eq(&self, other: &ParamValue) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn as_any(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.inner.as_deref()
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("ParamValue(null)")
        } else {
            write!(f, "ParamValue(<{}>)", self.type_name)
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_keeps_exact_type() {
        let v = ParamValue::new(42i32);
        assert!(v.is::<i32>());
        assert!(!v.is::<i64>());
        assert_eq!(v.downcast_ref::<i32>(), Some(&42));
        assert_eq!(v.downcast_ref::<u32>(), None);
        assert_eq!(v.type_name(), "i32");
    }

    #[test]
    fn str_literal_is_not_a_string() {
        let v = ParamValue::new("Alice");
        assert!(v.is::<&'static str>());
        assert!(!v.is::<String>());
    }

    #[test]
    fn null_marker() {
        let v = ParamValue::null();
        assert!(v.is_null());
        assert!(!v.is::<()>());
        assert_eq!(v.downcast_ref::<String>(), None);
        assert_eq!(v.type_name(), NULL_TYPE_NAME);
        assert_eq!(format!("{:?}", v), "ParamValue(null)");
    }

    #[test]
    fn from_option_maps_none_to_null() {
        assert!(ParamValue::from_option::<u8>(None).is_null());
        let some = ParamValue::from_option(Some(7u8));
        assert_eq!(some.downcast_ref::<u8>(), Some(&7));
    }

    #[test]
    fn clones_share_allocation() {
        let v = ParamValue::new(json!({"variant": "primary"}));
        let c = v.clone();
        assert!(v.ptr_eq(&c));

        let other = ParamValue::new(json!({"variant": "primary"}));
        assert!(!v.ptr_eq(&other));
        assert!(!v.ptr_eq(&ParamValue::null()));
    }

    #[test]
    fn from_arc_keeps_identity() {
        let shared = Arc::new(String::from("on_click"));
        let v = ParamValue::from_arc(Arc::clone(&shared));
        let back = v.downcast_arc::<String>().unwrap();
        assert!(Arc::ptr_eq(&shared, &back));
        assert!(v.downcast_arc::<i32>().is_none());
    }

    #[test]
    fn debug_shows_type_name() {
        let v = ParamValue::new(vec![1u8, 2]);
        let shown = format!("{:?}", v);
        assert!(shown.starts_with("ParamValue(<"));
        assert!(shown.contains("Vec<u8>"));
    }
}
