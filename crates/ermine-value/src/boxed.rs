//! Boxed primitive wrappers
//!
//! Object forms of `boolean`, `number`, and `string`. The payload is
//! immutable; identity lives in the surrounding `Arc`.

use std::sync::Arc;

use crate::value::Value;

/// A boxed Boolean/Number/String wrapper object
#[derive(Debug, Clone, PartialEq)]
pub enum BoxedPrimitive {
    /// Boolean wrapper
    Boolean(bool),
    /// Number wrapper
    Number(f64),
    /// String wrapper
    String(Arc<str>),
}

impl BoxedPrimitive {
    /// The wrapped value as an unboxed scalar.
    pub fn primitive(&self) -> Value {
        match self {
            BoxedPrimitive::Boolean(b) => Value::boolean(*b),
            BoxedPrimitive::Number(n) => Value::number(*n),
            BoxedPrimitive::String(s) => Value::String(s.clone()),
        }
    }

    /// The wrapped boolean, if this is a Boolean box.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            BoxedPrimitive::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The wrapped number, if this is a Number box.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            BoxedPrimitive::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The wrapped string, if this is a String box.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoxedPrimitive::String(s) => Some(s),
            _ => None,
        }
    }
}
