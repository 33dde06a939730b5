//! The deep-clone engine
//!
//! Duplicates an arbitrary, possibly cyclic value graph, producing a
//! structurally independent copy that preserves reference-sharing
//! topology: positions in the source that pointed at one allocation point
//! at one (new) allocation in the result.
//!
//! Two entry points:
//! - [`deep_clone`] allocates and returns a fresh result.
//! - [`deep_clone_into`] truncates a caller-supplied container and
//!   repopulates it in place, returning the same container.
//!
//! The engine is synchronous and reentrant. Each invocation owns its own
//! identity map, so concurrent calls and recursive calls from a
//! [`CloneCapable`] delegate never share state.

use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::array::JsArray;
use crate::array_buffer::JsArrayBuffer;
use crate::blob::JsBlob;
use crate::error::{CloneError, CloneResult};
use crate::object::JsObject;
use crate::regexp::JsRegExp;
use crate::value::Value;

/// Performs deep cloning of a value graph
///
/// Holds the identity map for one top-level invocation: source allocation
/// address to already-built destination. A source identity appears at most
/// once; every further encounter resolves to the same destination, which
/// both preserves shared references and terminates cycles.
pub struct DeepCloner {
    /// Map from source allocation address to cloned value
    memory: FxHashMap<usize, Value>,
}

impl DeepCloner {
    /// Create a cloner with an empty identity map.
    pub fn new() -> Self {
        Self {
            memory: FxHashMap::default(),
        }
    }

    /// Clone a value, allocating a fresh result.
    ///
    /// Atomic values come back unchanged. Heap values come back with a new
    /// identity, except where the source graph shared an allocation — the
    /// result shares the corresponding new allocation.
    pub fn clone_value(&mut self, value: &Value) -> CloneResult<Value> {
        self.internal_clone(value)
    }

    /// Clone `source` into a caller-supplied container.
    ///
    /// The destination is truncated (arrays to zero length, objects to no
    /// own properties) and repopulated element-by-element / key-by-key.
    /// The `(source, destination)` pair is seeded into the identity map
    /// before recursion, so a source that contains a reference back to
    /// itself resolves to the destination rather than recursing forever.
    ///
    /// Returns the destination itself (same identity), enabling chaining.
    pub fn clone_into(&mut self, source: &Value, destination: &Value) -> CloneResult<Value> {
        match (source, destination) {
            (Value::Array(src), Value::Array(dst)) => {
                // Snapshot before truncating: the source may alias the destination
                let elements = src.to_vec();
                debug!(discarded = dst.len(), "merge: truncating destination array");
                dst.clear();
                self.memory
                    .insert(Arc::as_ptr(src) as usize, destination.clone());
                for element in elements {
                    let cloned = self.internal_clone(&element)?;
                    dst.push(cloned);
                }
                Ok(destination.clone())
            }
            (Value::Object(src), Value::Object(dst)) => {
                let entries: Vec<_> = src
                    .own_keys()
                    .into_iter()
                    .filter_map(|key| src.get_own(key.as_ref()).map(|value| (key, value)))
                    .collect();
                debug!(discarded = dst.len(), "merge: clearing destination object");
                dst.clear();
                self.memory
                    .insert(Arc::as_ptr(src) as usize, destination.clone());
                for (key, value) in entries {
                    let cloned = self.internal_clone(&value)?;
                    dst.set(key, cloned);
                }
                Ok(destination.clone())
            }
            (_, Value::Array(_) | Value::Object(_)) => Err(CloneError::MergeMismatch {
                source_kind: source.kind_name(),
                destination_kind: destination.kind_name(),
            }),
            _ => Err(CloneError::InvalidDestination(destination.kind_name())),
        }
    }

    fn internal_clone(&mut self, value: &Value) -> CloneResult<Value> {
        // Scalar gate: atomic values are copied by reference, never deep-cloned.
        if value.is_atomic() {
            return Ok(value.clone());
        }

        // Identity check: a repeated allocation resolves to the destination
        // already built for it. Containers register before recursing into
        // children, so this is also what breaks cycles.
        if let Some(id) = value.identity() {
            if let Some(existing) = self.memory.get(&id) {
                trace!(identity = id, "identity map hit");
                return Ok(existing.clone());
            }
        }

        match value {
            Value::TypedArray(ta) => {
                // The backing buffer goes through the identity map too, so
                // views that shared a buffer share the cloned buffer.
                let buffer = self.clone_buffer(ta.buffer());
                let cloned = Value::typed_array(Arc::new(ta.with_buffer(buffer)));
                self.remember(value, &cloned);
                Ok(cloned)
            }
            Value::ArrayBuffer(ab) => Ok(Value::array_buffer(self.clone_buffer(ab))),
            Value::Boxed(b) => {
                let cloned = Value::boxed(Arc::new((**b).clone()));
                self.remember(value, &cloned);
                Ok(cloned)
            }
            Value::Date(d) => {
                let cloned = Value::date(Arc::new(**d));
                self.remember(value, &cloned);
                Ok(cloned)
            }
            Value::RegExp(r) => {
                let new_regex = JsRegExp::new(r.pattern().to_owned(), r.flags().to_owned());
                // Preserve in-progress global-match state
                new_regex.set_last_index(r.last_index());
                let cloned = Value::regexp(Arc::new(new_regex));
                self.remember(value, &cloned);
                Ok(cloned)
            }
            Value::Blob(b) => {
                let cloned = Value::blob(Arc::new(JsBlob::new(
                    b.bytes().to_vec(),
                    b.mime_type().to_owned(),
                )));
                self.remember(value, &cloned);
                Ok(cloned)
            }
            Value::Cloneable(c) => {
                debug!(kind = c.type_name(), "delegating to cloneable");
                // Full delegation: the engine does not recurse into the
                // internals, and a failure propagates unmodified.
                let cloned = c.clone_value()?;
                self.remember(value, &cloned);
                Ok(cloned)
            }
            Value::Array(arr) => self.clone_array(arr),
            Value::Object(obj) => self.clone_object(obj),
            // Atomic kinds were handled by the scalar gate
            _ => Ok(value.clone()),
        }
    }

    fn clone_array(&mut self, arr: &Arc<JsArray>) -> CloneResult<Value> {
        let new_arr = Arc::new(JsArray::new());
        let cloned = Value::array(new_arr.clone());

        // Register before cloning elements so self-references resolve here
        self.memory.insert(Arc::as_ptr(arr) as usize, cloned.clone());

        for element in arr.to_vec() {
            let element = self.internal_clone(&element)?;
            new_arr.push(element);
        }

        Ok(cloned)
    }

    fn clone_object(&mut self, obj: &Arc<JsObject>) -> CloneResult<Value> {
        // The prototype is shared with the source, not cloned.
        let new_obj = Arc::new(JsObject::new(obj.prototype().cloned()));
        let cloned = Value::object(new_obj.clone());

        // Register before cloning properties so cycles resolve here
        self.memory.insert(Arc::as_ptr(obj) as usize, cloned.clone());

        // Own enumerable keys only; inherited properties stay on the shared
        // prototype. Insertion order carries over.
        for key in obj.own_keys() {
            if let Some(value) = obj.get_own(key.as_ref()) {
                let value = self.internal_clone(&value)?;
                new_obj.set(key, value);
            }
        }

        Ok(cloned)
    }

    /// Copy a raw buffer at most once per invocation.
    ///
    /// Registered under the buffer's own identity, so a buffer reachable
    /// both directly and through typed-array views maps to one copy.
    fn clone_buffer(&mut self, buffer: &Arc<JsArrayBuffer>) -> Arc<JsArrayBuffer> {
        let id = Arc::as_ptr(buffer) as usize;
        if let Some(Value::ArrayBuffer(existing)) = self.memory.get(&id) {
            return existing.clone();
        }
        let copy = Arc::new(buffer.slice(0, buffer.byte_length()));
        self.memory.insert(id, Value::array_buffer(copy.clone()));
        copy
    }

    fn remember(&mut self, source: &Value, cloned: &Value) {
        if let Some(id) = source.identity() {
            self.memory.insert(id, cloned.clone());
        }
    }
}

impl Default for DeepCloner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clone a value graph, returning a fresh, structurally independent copy.
pub fn deep_clone(value: &Value) -> CloneResult<Value> {
    DeepCloner::new().clone_value(value)
}

/// Clone a value graph into an existing container, truncating it first.
/// Returns the destination (same identity) for chaining.
pub fn deep_clone_into(value: &Value, destination: &Value) -> CloneResult<Value> {
    DeepCloner::new().clone_into(value, destination)
}
