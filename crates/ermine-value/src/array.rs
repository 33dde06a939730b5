//! Sequence containers
//!
//! Arrays are dense, index-ordered sequences. There is no hole tracking:
//! every position holds a value (possibly `undefined`).

use parking_lot::RwLock;

use crate::value::Value;

/// A sequence of values
///
/// Thread-safe with interior mutability.
pub struct JsArray {
    elements: RwLock<Vec<Value>>,
}

impl JsArray {
    /// Create a new empty array.
    pub fn new() -> Self {
        Self {
            elements: RwLock::new(Vec::new()),
        }
    }

    /// Create an array from existing values.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            elements: RwLock::new(values),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.elements.read().get(index).cloned()
    }

    /// Overwrite the element at `index`. Returns `false` when out of bounds.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut elements = self.elements.write();
        match elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Append an element.
    pub fn push(&self, value: Value) {
        self.elements.write().push(value);
    }

    /// Remove and return the last element.
    pub fn pop(&self) -> Option<Value> {
        self.elements.write().pop()
    }

    /// Truncate to zero length.
    pub fn clear(&self) {
        self.elements.write().clear();
    }

    /// Snapshot the elements in index order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.elements.read().clone()
    }
}

impl Default for JsArray {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JsArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JsArray({})", self.elements.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_get() {
        let arr = JsArray::new();
        arr.push(Value::number(1.0));
        arr.push(Value::number(2.0));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(0), Some(Value::number(1.0)));
        assert_eq!(arr.get(2), None);
    }

    #[test]
    fn test_set_bounds() {
        let arr = JsArray::from_values(vec![Value::null()]);
        assert!(arr.set(0, Value::boolean(true)));
        assert!(!arr.set(1, Value::boolean(true)));
        assert_eq!(arr.get(0), Some(Value::boolean(true)));
    }

    #[test]
    fn test_clear() {
        let arr = JsArray::from_values(vec![Value::number(1.0), Value::number(2.0)]);
        arr.clear();
        assert!(arr.is_empty());
    }

    #[test]
    fn test_array_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsArray>();
    }
}
