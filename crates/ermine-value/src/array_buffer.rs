//! Raw binary buffers
//!
//! `JsArrayBuffer` is the backing store for typed-array views. Cloning a
//! buffer is a byte-for-byte copy via [`JsArrayBuffer::slice`].

use parking_lot::RwLock;

/// A raw buffer of binary data
#[derive(Debug)]
pub struct JsArrayBuffer {
    data: RwLock<Vec<u8>>,
}

impl JsArrayBuffer {
    /// Create a zero-filled buffer with the specified byte length.
    pub fn new(byte_length: usize) -> Self {
        Self {
            data: RwLock::new(vec![0; byte_length]),
        }
    }

    /// Create a buffer from existing bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(bytes),
        }
    }

    /// Get the byte length.
    pub fn byte_length(&self) -> usize {
        self.data.read().len()
    }

    /// Read a byte at the given index.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.read().get(index).copied()
    }

    /// Write a byte at the given index.
    pub fn set(&self, index: usize, value: u8) -> bool {
        let mut data = self.data.write();
        match data.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Read bytes into a slice. Returns `false` if the range is out of bounds.
    pub fn read_bytes(&self, offset: usize, dest: &mut [u8]) -> bool {
        let data = self.data.read();
        if offset + dest.len() <= data.len() {
            dest.copy_from_slice(&data[offset..offset + dest.len()]);
            return true;
        }
        false
    }

    /// Write bytes from a slice. Returns `false` if the range is out of bounds.
    pub fn write_bytes(&self, offset: usize, src: &[u8]) -> bool {
        let mut data = self.data.write();
        if offset + src.len() <= data.len() {
            data[offset..offset + src.len()].copy_from_slice(src);
            return true;
        }
        false
    }

    /// Copy a byte range into a new buffer. Out-of-range bounds are clamped.
    pub fn slice(&self, start: usize, end: usize) -> JsArrayBuffer {
        let data = self.data.read();
        let len = data.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        JsArrayBuffer::from_bytes(data[start..end].to_vec())
    }

    /// Snapshot the bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    /// Run `f` with a borrow of the raw bytes (for typed-array views).
    pub fn with_data<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(&self.data.read())
    }

    /// Run `f` with a mutable borrow of the raw bytes.
    pub fn with_data_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<u8>) -> R,
    {
        f(&mut self.data.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let ab = JsArrayBuffer::new(16);
        assert_eq!(ab.byte_length(), 16);
        assert_eq!(ab.get(0), Some(0));
    }

    #[test]
    fn test_get_set() {
        let ab = JsArrayBuffer::new(4);
        assert!(ab.set(0, 42));
        assert_eq!(ab.get(0), Some(42));
        assert_eq!(ab.get(4), None); // Out of bounds
    }

    #[test]
    fn test_slice_copies() {
        let ab = JsArrayBuffer::from_bytes(vec![0, 0, 0, 0, 1, 2, 3, 4]);
        let slice = ab.slice(4, 8);
        assert_eq!(slice.byte_length(), 4);
        assert_eq!(slice.to_vec(), vec![1, 2, 3, 4]);

        // Writes to the slice do not affect the source
        slice.set(0, 99);
        assert_eq!(ab.get(4), Some(1));
    }

    #[test]
    fn test_slice_clamps_bounds() {
        let ab = JsArrayBuffer::new(4);
        assert_eq!(ab.slice(2, 100).byte_length(), 2);
        assert_eq!(ab.slice(10, 20).byte_length(), 0);
    }

    #[test]
    fn test_read_write_bytes() {
        let ab = JsArrayBuffer::new(8);
        let src = [1, 2, 3, 4];
        assert!(ab.write_bytes(2, &src));

        let mut dest = [0u8; 4];
        assert!(ab.read_bytes(2, &mut dest));
        assert_eq!(dest, [1, 2, 3, 4]);

        assert!(!ab.write_bytes(6, &src)); // Past the end
    }
}
