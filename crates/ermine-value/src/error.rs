//! Clone engine error types

use thiserror::Error;

/// Errors produced by the deep-clone engine.
///
/// The engine itself never fails on value shape: every kind in the value
/// model has a reconstruction rule. The two failure paths are a merge
/// destination the engine cannot populate, and a [`CloneCapable`]
/// delegate reporting its own failure (which passes through unmodified).
///
/// [`CloneCapable`]: crate::cloneable::CloneCapable
#[derive(Debug, Error)]
pub enum CloneError {
    /// The merge destination is not an array or keyed object.
    #[error("destination is not a mutable container: {0}")]
    InvalidDestination(&'static str),

    /// The source cannot be merged into the given destination kind.
    // Field is not named `source`: thiserror would treat that as the
    // error's cause, and `&'static str` is not an error.
    #[error("cannot merge {source_kind} into {destination_kind}")]
    MergeMismatch {
        /// Kind name of the source value
        source_kind: &'static str,
        /// Kind name of the destination container
        destination_kind: &'static str,
    },

    /// A cloneable delegate failed. Propagated to the caller unmodified.
    #[error(transparent)]
    Delegate(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl CloneError {
    /// Wrap a delegate failure for propagation out of the engine.
    pub fn delegate(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Delegate(err.into())
    }
}

/// Result type for clone operations
pub type CloneResult<T> = std::result::Result<T, CloneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegate_message_passes_through() {
        let err = CloneError::delegate("node refused to clone");
        assert_eq!(err.to_string(), "node refused to clone");
    }

    #[test]
    fn test_mismatch_display() {
        let err = CloneError::MergeMismatch {
            source_kind: "number",
            destination_kind: "array",
        };
        assert_eq!(err.to_string(), "cannot merge number into array");
        // The kind names are plain labels, not an error cause
        assert!(std::error::Error::source(&err).is_none());
    }
}
