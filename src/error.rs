//! Error taxonomy for rope operations.

use thiserror::Error;

/// Everything that can go wrong calling into a [`crate::Rope`].
///
/// Allocation failure is deliberately absent: Rust's global allocator aborts
/// the process on OOM rather than handing back a recoverable error, so
/// there is no fallible path to represent it on.
#[derive(Debug, Error)]
pub enum RopeError {
    /// `index` falls outside `0..=len`.
    #[error("index {index} is out of range for a rope of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A `load`/`save` call failed at the filesystem boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, RopeError>;
