//! Dynamic values
//!
//! `Value` is the unit the clone engine operates on. Scalars are stored
//! inline; everything object-like lives behind an `Arc`, which is what
//! gives heap values a stable identity (the allocation address) and makes
//! the whole graph `Send + Sync`.
//!
//! Atomic kinds (scalars, strings, functions) are copied by reference and
//! never deep-cloned. Heap kinds each have a reconstruction rule in the
//! engine.

use std::sync::Arc;

use crate::array::JsArray;
use crate::array_buffer::JsArrayBuffer;
use crate::blob::JsBlob;
use crate::boxed::BoxedPrimitive;
use crate::cloneable::CloneCapable;
use crate::date::JsDate;
use crate::object::JsObject;
use crate::regexp::JsRegExp;
use crate::typed_array::JsTypedArray;

/// Native function handler type
///
/// Functions are opaque to the value model: they are held and passed by
/// reference, never cloned or introspected.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;

/// A dynamic value
#[derive(Clone, Default)]
pub enum Value {
    /// The undefined value
    #[default]
    Undefined,
    /// The null value
    Null,
    /// Boolean scalar
    Boolean(bool),
    /// Number scalar (f64)
    Number(f64),
    /// Immutable shared string
    String(Arc<str>),
    /// Native function, copied by reference
    Function(NativeFn),
    /// Keyed object
    Object(Arc<JsObject>),
    /// Sequence
    Array(Arc<JsArray>),
    /// Boxed Boolean/Number/String wrapper
    Boxed(Arc<BoxedPrimitive>),
    /// Date (epoch timestamp)
    Date(Arc<JsDate>),
    /// Regular expression
    RegExp(Arc<JsRegExp>),
    /// Raw binary buffer
    ArrayBuffer(Arc<JsArrayBuffer>),
    /// Typed numeric view over a buffer
    TypedArray(Arc<JsTypedArray>),
    /// Binary blob with a MIME type
    Blob(Arc<JsBlob>),
    /// Object providing its own clone operation
    Cloneable(Arc<dyn CloneCapable>),
}

impl Value {
    /// Create undefined value
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Create null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create boolean value
    pub const fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Create number value
    pub const fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Create string value
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::String(s.into())
    }

    /// Create function value
    pub fn function(f: NativeFn) -> Self {
        Self::Function(f)
    }

    /// Create object value
    pub fn object(obj: Arc<JsObject>) -> Self {
        Self::Object(obj)
    }

    /// Create array value
    pub fn array(arr: Arc<JsArray>) -> Self {
        Self::Array(arr)
    }

    /// Create boxed primitive value
    pub fn boxed(b: Arc<BoxedPrimitive>) -> Self {
        Self::Boxed(b)
    }

    /// Create date value
    pub fn date(d: Arc<JsDate>) -> Self {
        Self::Date(d)
    }

    /// Create regexp value
    pub fn regexp(r: Arc<JsRegExp>) -> Self {
        Self::RegExp(r)
    }

    /// Create ArrayBuffer value
    pub fn array_buffer(ab: Arc<JsArrayBuffer>) -> Self {
        Self::ArrayBuffer(ab)
    }

    /// Create typed array value
    pub fn typed_array(ta: Arc<JsTypedArray>) -> Self {
        Self::TypedArray(ta)
    }

    /// Create blob value
    pub fn blob(b: Arc<JsBlob>) -> Self {
        Self::Blob(b)
    }

    /// Create cloneable value
    pub fn cloneable(c: Arc<dyn CloneCapable>) -> Self {
        Self::Cloneable(c)
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if value is null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Check if value is a boolean
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if value is a function
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Check if value is a keyed object
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if value is a generic container (array or keyed object)
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Check if value is atomic: copied by reference, never deep-cloned.
    /// Scalars, strings, and functions are atomic; everything else has an
    /// identity and a reconstruction rule.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Self::Undefined
                | Self::Null
                | Self::Boolean(_)
                | Self::Number(_)
                | Self::String(_)
                | Self::Function(_)
        )
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as function
    pub fn as_function(&self) -> Option<&NativeFn> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Get as keyed object
    pub fn as_object(&self) -> Option<&Arc<JsObject>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&Arc<JsArray>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as boxed primitive
    pub fn as_boxed(&self) -> Option<&Arc<BoxedPrimitive>> {
        match self {
            Self::Boxed(b) => Some(b),
            _ => None,
        }
    }

    /// Get as date
    pub fn as_date(&self) -> Option<&Arc<JsDate>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Get as regexp
    pub fn as_regexp(&self) -> Option<&Arc<JsRegExp>> {
        match self {
            Self::RegExp(r) => Some(r),
            _ => None,
        }
    }

    /// Get as ArrayBuffer
    pub fn as_array_buffer(&self) -> Option<&Arc<JsArrayBuffer>> {
        match self {
            Self::ArrayBuffer(ab) => Some(ab),
            _ => None,
        }
    }

    /// Get as typed array
    pub fn as_typed_array(&self) -> Option<&Arc<JsTypedArray>> {
        match self {
            Self::TypedArray(ta) => Some(ta),
            _ => None,
        }
    }

    /// Get as blob
    pub fn as_blob(&self) -> Option<&Arc<JsBlob>> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Get as cloneable
    pub fn as_cloneable(&self) -> Option<&Arc<dyn CloneCapable>> {
        match self {
            Self::Cloneable(c) => Some(c),
            _ => None,
        }
    }

    /// Identity of a heap value: the allocation address behind the `Arc`.
    /// Atomic values have no identity.
    ///
    /// Two values with the same identity are the same allocation; this is
    /// what the clone engine keys its identity map on.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::Object(o) => Some(Arc::as_ptr(o) as usize),
            Self::Array(a) => Some(Arc::as_ptr(a) as usize),
            Self::Boxed(b) => Some(Arc::as_ptr(b) as usize),
            Self::Date(d) => Some(Arc::as_ptr(d) as usize),
            Self::RegExp(r) => Some(Arc::as_ptr(r) as usize),
            Self::ArrayBuffer(ab) => Some(Arc::as_ptr(ab) as usize),
            Self::TypedArray(ta) => Some(Arc::as_ptr(ta) as usize),
            Self::Blob(b) => Some(Arc::as_ptr(b) as usize),
            Self::Cloneable(c) => Some(Arc::as_ptr(c) as *const () as usize),
            _ => None,
        }
    }

    /// Kind name used in error messages and `Debug` output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Boxed(_) => "boxed primitive",
            Self::Date(_) => "date",
            Self::RegExp(_) => "regexp",
            Self::ArrayBuffer(_) => "arraybuffer",
            Self::TypedArray(_) => "typed array",
            Self::Blob(_) => "blob",
            Self::Cloneable(c) => c.type_name(),
        }
    }

    /// The `typeof`-style type name: `"object"` for every heap kind,
    /// `"function"` for functions, the scalar name otherwise.
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            _ => "object",
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `NaN`, and the empty
    /// string are falsy; every heap value is truthy.
    pub fn to_boolean(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => !n.is_nan() && *n != 0.0,
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Function(_) => write!(f, "[Function]"),
            Self::Object(o) => write!(f, "[object Object({})]", o.len()),
            Self::Array(a) => write!(f, "[object Array({})]", a.len()),
            Self::Boxed(b) => write!(f, "[boxed {:?}]", b.primitive()),
            Self::Date(d) => match d.to_iso_string() {
                Some(iso) => write!(f, "[date {iso}]"),
                None => write!(f, "[date {}ms]", d.timestamp_millis()),
            },
            Self::RegExp(r) => write!(f, "{r:?}"),
            Self::ArrayBuffer(ab) => write!(f, "ArrayBuffer({})", ab.byte_length()),
            Self::TypedArray(ta) => write!(f, "{}({})", ta.kind().name(), ta.length()),
            Self::Blob(b) => write!(f, "Blob({}, {})", b.size(), b.mime_type()),
            Self::Cloneable(c) => write!(f, "[cloneable {}]", c.type_name()),
        }
    }
}

impl PartialEq for Value {
    /// Scalars compare by value (with `NaN != NaN`), strings by content,
    /// and heap values by identity. Structural comparison of containers is
    /// deliberately not provided here; it would not terminate on cycles.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => match (self.identity(), other.identity()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_predicates() {
        assert!(Value::undefined().is_undefined());
        assert!(Value::null().is_nullish());
        assert!(Value::boolean(true).is_boolean());
        assert!(Value::number(1.0).is_number());
        assert!(Value::string("x").is_string());
        assert!(Value::undefined().is_atomic());
        assert!(!Value::object(Arc::new(JsObject::bare())).is_atomic());
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::undefined().type_of(), "undefined");
        assert_eq!(Value::null().type_of(), "object");
        assert_eq!(Value::number(1.0).type_of(), "number");
        assert_eq!(Value::array(Arc::new(JsArray::new())).type_of(), "object");
        assert_eq!(
            Value::date(Arc::new(JsDate::from_timestamp_millis(0))).type_of(),
            "object"
        );
    }

    #[test]
    fn test_to_boolean() {
        assert!(!Value::undefined().to_boolean());
        assert!(!Value::number(f64::NAN).to_boolean());
        assert!(!Value::number(0.0).to_boolean());
        assert!(!Value::string("").to_boolean());
        assert!(Value::string("x").to_boolean());
        assert!(Value::object(Arc::new(JsObject::bare())).to_boolean());
    }

    #[test]
    fn test_identity() {
        let obj = Arc::new(JsObject::bare());
        let a = Value::object(obj.clone());
        let b = Value::object(obj);
        assert_eq!(a.identity(), b.identity());
        assert!(a.identity().is_some());
        assert_eq!(Value::number(1.0).identity(), None);
        assert_eq!(Value::string("s").identity(), None);
    }

    #[test]
    fn test_eq_by_identity_for_heap_kinds() {
        let obj = Arc::new(JsObject::bare());
        assert_eq!(Value::object(obj.clone()), Value::object(obj));
        assert_ne!(
            Value::object(Arc::new(JsObject::bare())),
            Value::object(Arc::new(JsObject::bare()))
        );
        // NaN != NaN
        assert_ne!(Value::number(f64::NAN), Value::number(f64::NAN));
        // Strings compare by content
        assert_eq!(Value::string("abc"), Value::string("abc"));
    }

    #[test]
    fn test_value_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
    }
}
