//! Typed numeric views over raw buffers
//!
//! A typed array does not own bytes; it is a (kind, offset, length) view
//! over a shared [`JsArrayBuffer`]. All 11 kinds share one implementation
//! via `TypedArrayKind`.

use std::sync::Arc;

use crate::array_buffer::JsArrayBuffer;

/// The kind of typed array - determines element size and interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    /// 8-bit signed integers
    Int8,
    /// 8-bit unsigned integers
    Uint8,
    /// 8-bit unsigned integers, clamped on write
    Uint8Clamped,
    /// 16-bit signed integers
    Int16,
    /// 16-bit unsigned integers
    Uint16,
    /// 32-bit signed integers
    Int32,
    /// 32-bit unsigned integers
    Uint32,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// 64-bit signed integers
    BigInt64,
    /// 64-bit unsigned integers
    BigUint64,
}

impl TypedArrayKind {
    /// Byte size of each element.
    pub fn element_size(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// Display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Whether elements are read and written as 64-bit integers.
    pub fn is_bigint(&self) -> bool {
        matches!(self, TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64)
    }
}

/// A typed view over a [`JsArrayBuffer`]
///
/// The view references the underlying buffer; it never copies on access.
#[derive(Debug)]
pub struct JsTypedArray {
    buffer: Arc<JsArrayBuffer>,
    /// Byte offset into the buffer
    byte_offset: usize,
    /// Number of elements (not bytes)
    length: usize,
    kind: TypedArrayKind,
}

impl JsTypedArray {
    /// Create a new view over a buffer.
    ///
    /// The offset must be element-aligned and the view must fit inside the
    /// buffer.
    pub fn new(
        buffer: Arc<JsArrayBuffer>,
        kind: TypedArrayKind,
        byte_offset: usize,
        length: usize,
    ) -> Result<Self, &'static str> {
        let elem_size = kind.element_size();

        if byte_offset % elem_size != 0 {
            return Err("byte offset must be aligned to element size");
        }

        let byte_length = length
            .checked_mul(elem_size)
            .ok_or("typed array length overflow")?;
        if byte_offset + byte_length > buffer.byte_length() {
            return Err("typed array would extend past end of buffer");
        }

        Ok(Self {
            buffer,
            byte_offset,
            length,
            kind,
        })
    }

    /// Create a view with its own zero-filled buffer.
    pub fn with_length(kind: TypedArrayKind, length: usize) -> Self {
        let buffer = Arc::new(JsArrayBuffer::new(length * kind.element_size()));
        Self {
            buffer,
            byte_offset: 0,
            length,
            kind,
        }
    }

    /// The kind of this view.
    pub fn kind(&self) -> TypedArrayKind {
        self.kind
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &Arc<JsArrayBuffer> {
        &self.buffer
    }

    /// Byte offset into the buffer.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Byte length of the view.
    pub fn byte_length(&self) -> usize {
        self.length * self.kind.element_size()
    }

    /// Number of elements.
    pub fn length(&self) -> usize {
        self.length
    }

    /// View another buffer through the same kind, offset, and length.
    /// `buffer` must be at least as long as the current buffer; the clone
    /// engine upholds this by passing a byte-for-byte copy.
    pub(crate) fn with_buffer(&self, buffer: Arc<JsArrayBuffer>) -> JsTypedArray {
        // Fields were validated when this view was constructed.
        JsTypedArray {
            buffer,
            byte_offset: self.byte_offset,
            length: self.length,
            kind: self.kind,
        }
    }

    /// Get an element as f64 (for non-bigint kinds).
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.length {
            return None;
        }

        let byte_index = self.byte_offset + index * self.kind.element_size();

        Some(self.buffer.with_data(|data| {
            let bytes = &data[byte_index..];
            match self.kind {
                TypedArrayKind::Int8 => bytes[0] as i8 as f64,
                TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => bytes[0] as f64,
                TypedArrayKind::Int16 => i16::from_le_bytes([bytes[0], bytes[1]]) as f64,
                TypedArrayKind::Uint16 => u16::from_le_bytes([bytes[0], bytes[1]]) as f64,
                TypedArrayKind::Int32 => {
                    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64
                }
                TypedArrayKind::Uint32 => {
                    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64
                }
                TypedArrayKind::Float32 => {
                    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64
                }
                TypedArrayKind::Float64 => f64::from_le_bytes([
                    bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
                ]),
                // Bigint kinds go through get_bigint
                TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => f64::NAN,
            }
        }))
    }

    /// Get an element as i64 (for bigint kinds).
    pub fn get_bigint(&self, index: usize) -> Option<i64> {
        if index >= self.length || !self.kind.is_bigint() {
            return None;
        }

        let byte_index = self.byte_offset + index * self.kind.element_size();

        Some(self.buffer.with_data(|data| {
            let bytes = &data[byte_index..];
            let raw = [
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ];
            match self.kind {
                TypedArrayKind::BigInt64 => i64::from_le_bytes(raw),
                _ => u64::from_le_bytes(raw) as i64,
            }
        }))
    }

    /// Set an element from f64 (for non-bigint kinds).
    pub fn set(&self, index: usize, value: f64) -> bool {
        if index >= self.length || self.kind.is_bigint() {
            return false;
        }

        let byte_index = self.byte_offset + index * self.kind.element_size();

        self.buffer.with_data_mut(|data| {
            let bytes = &mut data[byte_index..];
            match self.kind {
                TypedArrayKind::Int8 => bytes[0] = value as i8 as u8,
                TypedArrayKind::Uint8 => bytes[0] = value as u8,
                TypedArrayKind::Uint8Clamped => {
                    bytes[0] = value.clamp(0.0, 255.0).round() as u8;
                }
                TypedArrayKind::Int16 => {
                    bytes[..2].copy_from_slice(&(value as i16).to_le_bytes());
                }
                TypedArrayKind::Uint16 => {
                    bytes[..2].copy_from_slice(&(value as u16).to_le_bytes());
                }
                TypedArrayKind::Int32 => {
                    bytes[..4].copy_from_slice(&(value as i32).to_le_bytes());
                }
                TypedArrayKind::Uint32 => {
                    bytes[..4].copy_from_slice(&(value as u32).to_le_bytes());
                }
                TypedArrayKind::Float32 => {
                    bytes[..4].copy_from_slice(&(value as f32).to_le_bytes());
                }
                TypedArrayKind::Float64 => {
                    bytes[..8].copy_from_slice(&value.to_le_bytes());
                }
                TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => unreachable!(),
            }
        });
        true
    }

    /// Set an element from i64 (for bigint kinds).
    pub fn set_bigint(&self, index: usize, value: i64) -> bool {
        if index >= self.length || !self.kind.is_bigint() {
            return false;
        }

        let byte_index = self.byte_offset + index * self.kind.element_size();
        self.buffer.with_data_mut(|data| {
            data[byte_index..byte_index + 8].copy_from_slice(&value.to_le_bytes());
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_validation() {
        let buffer = Arc::new(JsArrayBuffer::new(8));
        assert!(JsTypedArray::new(buffer.clone(), TypedArrayKind::Int16, 1, 2).is_err());
        assert!(JsTypedArray::new(buffer.clone(), TypedArrayKind::Int16, 2, 2).is_ok());
        assert!(JsTypedArray::new(buffer, TypedArrayKind::Int16, 2, 4).is_err()); // Past end
    }

    #[test]
    fn test_get_set_roundtrip() {
        let ta = JsTypedArray::with_length(TypedArrayKind::Int16, 3);
        assert!(ta.set(0, -5.0));
        assert!(ta.set(1, 300.0));
        assert_eq!(ta.get(0), Some(-5.0));
        assert_eq!(ta.get(1), Some(300.0));
        assert_eq!(ta.get(3), None);
    }

    #[test]
    fn test_uint8_clamped() {
        let ta = JsTypedArray::with_length(TypedArrayKind::Uint8Clamped, 2);
        ta.set(0, 300.0);
        ta.set(1, -20.0);
        assert_eq!(ta.get(0), Some(255.0));
        assert_eq!(ta.get(1), Some(0.0));
    }

    #[test]
    fn test_bigint_elements() {
        let ta = JsTypedArray::with_length(TypedArrayKind::BigInt64, 1);
        assert!(ta.set_bigint(0, -42));
        assert_eq!(ta.get_bigint(0), Some(-42));
        assert!(!ta.set(0, 1.0)); // f64 writes rejected for bigint kinds
    }

    #[test]
    fn test_view_shares_buffer() {
        let buffer = Arc::new(JsArrayBuffer::new(8));
        let a = JsTypedArray::new(buffer.clone(), TypedArrayKind::Uint8, 0, 8).unwrap();
        let b = JsTypedArray::new(buffer, TypedArrayKind::Uint8, 4, 4).unwrap();
        a.set(4, 7.0);
        assert_eq!(b.get(0), Some(7.0));
    }

    #[test]
    fn test_with_buffer_is_independent() {
        let ta = JsTypedArray::with_length(TypedArrayKind::Float64, 2);
        ta.set(0, 1.5);
        let bytes = Arc::new(ta.buffer().slice(0, ta.buffer().byte_length()));
        let copy = ta.with_buffer(bytes);
        assert_eq!(copy.kind(), TypedArrayKind::Float64);
        assert_eq!(copy.get(0), Some(1.5));
        copy.set(0, 9.0);
        assert_eq!(ta.get(0), Some(1.5));
    }
}
