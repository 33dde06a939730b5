//! Binary blobs
//!
//! A blob is an immutable byte payload tagged with a MIME type. Cloning a
//! blob reconstructs it from the same bytes and type.

/// An immutable binary object with a MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsBlob {
    data: Vec<u8>,
    mime: String,
}

impl JsBlob {
    /// Create a blob from bytes and a MIME type.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    /// The underlying bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// The MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime
    }

    /// Byte length.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Copy a byte range into a new blob with the same MIME type.
    /// Out-of-range bounds are clamped.
    pub fn slice(&self, start: usize, end: usize) -> JsBlob {
        let len = self.data.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        JsBlob::new(self.data[start..end].to_vec(), self.mime.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let blob = JsBlob::new(vec![1, 2, 3], "application/octet-stream");
        assert_eq!(blob.size(), 3);
        assert_eq!(blob.bytes(), &[1, 2, 3]);
        assert_eq!(blob.mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_slice() {
        let blob = JsBlob::new(vec![1, 2, 3, 4], "image/png");
        let part = blob.slice(1, 3);
        assert_eq!(part.bytes(), &[2, 3]);
        assert_eq!(part.mime_type(), "image/png");
        assert_eq!(blob.slice(3, 100).bytes(), &[4]);
    }
}
