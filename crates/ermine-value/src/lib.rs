//! # ermine-value
//!
//! A shared, thread-safe dynamic value graph with a structured deep-clone
//! engine.
//!
//! Values ([`Value`]) cover scalars plus the object-like kinds a dynamic
//! data model needs: keyed objects with prototype chains, arrays, boxed
//! primitives, dates, regexps, raw buffers, typed views, blobs, and
//! objects that carry their own clone capability.
//!
//! The engine ([`deep_clone`], [`deep_clone_into`]) duplicates an
//! arbitrary, possibly cyclic graph while preserving reference-sharing
//! topology: what was one allocation in the source is one allocation in
//! the copy.
//!
//! ```
//! use ermine_value::{deep_clone, JsObject, Value};
//! use std::sync::Arc;
//!
//! let shared = Arc::new(JsObject::bare());
//! shared.set("x", Value::number(1.0));
//!
//! let src = Arc::new(JsObject::bare());
//! src.set("a", Value::object(shared.clone()));
//! src.set("b", Value::object(shared));
//!
//! let copy = deep_clone(&Value::object(src)).unwrap();
//! let copy = copy.as_object().unwrap();
//! // Both positions still point at one (new) allocation
//! assert_eq!(copy.get("a"), copy.get("b"));
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod array;
pub mod array_buffer;
pub mod blob;
pub mod boxed;
pub mod clone;
pub mod cloneable;
pub mod date;
pub mod error;
pub mod object;
pub mod regexp;
pub mod typed_array;
pub mod value;

pub use array::JsArray;
pub use array_buffer::JsArrayBuffer;
pub use blob::JsBlob;
pub use boxed::BoxedPrimitive;
pub use clone::{DeepCloner, deep_clone, deep_clone_into};
pub use cloneable::CloneCapable;
pub use date::JsDate;
pub use error::{CloneError, CloneResult};
pub use object::JsObject;
pub use regexp::JsRegExp;
pub use typed_array::{JsTypedArray, TypedArrayKind};
pub use value::{NativeFn, Value};
