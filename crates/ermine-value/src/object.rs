//! Keyed objects with prototype chains
//!
//! Properties are string-keyed and insertion-ordered. An object may share a
//! prototype with other objects; own properties shadow inherited ones.
//! Symbol keys are not modeled.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::value::Value;

/// A keyed object
///
/// Thread-safe with interior mutability. Own properties keep insertion
/// order, which is what key-order-sensitive consumers (and the clone
/// engine) observe.
pub struct JsObject {
    /// Own properties, insertion-ordered
    properties: RwLock<IndexMap<Arc<str>, Value>>,
    /// Prototype; `None` for prototype-less (map-like) objects
    prototype: Option<Arc<JsObject>>,
}

impl JsObject {
    /// Create a new empty object with the given prototype.
    pub fn new(prototype: Option<Arc<JsObject>>) -> Self {
        Self {
            properties: RwLock::new(IndexMap::new()),
            prototype,
        }
    }

    /// Create a prototype-less object (a bare key/value map).
    pub fn bare() -> Self {
        Self::new(None)
    }

    /// Get a property, consulting own properties first and then the
    /// prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.properties.read().get(key) {
            return Some(value.clone());
        }
        if let Some(proto) = &self.prototype {
            return proto.get(key);
        }
        None
    }

    /// Get an own property only, ignoring the prototype chain.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.properties.read().get(key).cloned()
    }

    /// Set an own property. Inserting a new key appends it after all
    /// existing keys.
    pub fn set(&self, key: impl Into<Arc<str>>, value: Value) {
        self.properties.write().insert(key.into(), value);
    }

    /// Delete an own property, preserving the order of the remaining keys.
    pub fn delete(&self, key: &str) -> bool {
        self.properties.write().shift_remove(key).is_some()
    }

    /// Check for an own property.
    pub fn has_own(&self, key: &str) -> bool {
        self.properties.read().contains_key(key)
    }

    /// Check for a property anywhere on the prototype chain.
    pub fn has(&self, key: &str) -> bool {
        if self.has_own(key) {
            return true;
        }
        match &self.prototype {
            Some(proto) => proto.has(key),
            None => false,
        }
    }

    /// Own property keys in insertion order. Inherited keys are excluded.
    pub fn own_keys(&self) -> Vec<Arc<str>> {
        self.properties.read().keys().cloned().collect()
    }

    /// Remove all own properties. The prototype link is untouched.
    pub fn clear(&self) {
        self.properties.write().clear();
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    /// Whether the object has no own properties.
    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }

    /// The object's prototype, if any.
    pub fn prototype(&self) -> Option<&Arc<JsObject>> {
        self.prototype.as_ref()
    }
}

impl std::fmt::Debug for JsObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsObject")
            .field("properties", &self.properties.read().len())
            .field("has_prototype", &self.prototype.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let obj = JsObject::bare();
        obj.set("foo", Value::number(42.0));
        assert_eq!(obj.get("foo"), Some(Value::number(42.0)));
        assert_eq!(obj.get("bar"), None);
    }

    #[test]
    fn test_prototype_lookup() {
        let proto = Arc::new(JsObject::bare());
        proto.set("inherited", Value::boolean(true));

        let obj = JsObject::new(Some(proto));
        obj.set("own", Value::number(1.0));

        assert_eq!(obj.get("inherited"), Some(Value::boolean(true)));
        assert!(obj.has("inherited"));
        assert!(!obj.has_own("inherited"));
        // Own keys never include inherited properties
        let keys = obj.own_keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(&*keys[0], "own");
    }

    #[test]
    fn test_own_shadows_inherited() {
        let proto = Arc::new(JsObject::bare());
        proto.set("x", Value::number(1.0));
        let obj = JsObject::new(Some(proto));
        obj.set("x", Value::number(2.0));
        assert_eq!(obj.get("x"), Some(Value::number(2.0)));
    }

    #[test]
    fn test_key_order_is_insertion_order() {
        let obj = JsObject::bare();
        obj.set("b", Value::number(1.0));
        obj.set("a", Value::number(2.0));
        obj.set("c", Value::number(3.0));
        obj.delete("a");
        obj.set("a", Value::number(4.0));

        let keys = obj.own_keys();
        let names: Vec<&str> = keys.iter().map(|k| &**k).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn test_clear() {
        let obj = JsObject::bare();
        obj.set("x", Value::number(1.0));
        obj.clear();
        assert!(obj.is_empty());
    }

    #[test]
    fn test_object_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsObject>();
    }
}
