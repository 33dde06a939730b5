//! Capability-based cloneables
//!
//! Some host objects know how to duplicate themselves better than a
//! structural walk would (structural nodes, handles wrapping external
//! state). They implement [`CloneCapable`] and the engine delegates to
//! them entirely instead of recursing into their internals.

use crate::error::CloneResult;
use crate::value::Value;

/// An object that provides its own clone operation.
///
/// `clone_value` must produce a value that is independent of `self` to
/// whatever degree the implementation promises; the engine does not
/// inspect the result. A failure propagates unmodified out of
/// [`deep_clone`](crate::clone::deep_clone).
///
/// Implementations may reinvoke the engine recursively; every engine
/// invocation owns its own identity map, so reentrancy is safe.
pub trait CloneCapable: Send + Sync {
    /// Produce the clone.
    fn clone_value(&self) -> CloneResult<Value>;

    /// Name used in diagnostics and `Debug` output.
    fn type_name(&self) -> &'static str {
        "Cloneable"
    }
}
