//! Error types for list and queue operations.

use thiserror::Error;

/// Errors reported by list and queue operations.
///
/// Every mutating operation either fully completes or is rejected with one of
/// these before any structural change is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional operation addressed an index outside its valid range.
    #[error("position {position} out of range for length {len}")]
    OutOfRange {
        /// The rejected index.
        position: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A dequeue or peek was attempted on an empty queue.
    #[error("empty queue")]
    EmptyQueue,
}

/// Result type alias for list and queue operations.
pub type Result<T> = core::result::Result<T, Error>;
