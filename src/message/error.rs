//! Error types for message collection operations.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use thiserror::Error;

/// Errors raised by [`Messages`](crate::message::collection::Messages).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A value does not satisfy the message contract.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// An index does not refer to a message in the collection.
    #[error("index {index} is out of range for a collection of {len} messages")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the request.
        len: usize,
    },
}

impl CollectionError {
    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::TypeMismatch(reason.into())
    }

    /// Creates an out-of-range error for `index` against a collection of `len`.
    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns `true` if this error is a type mismatch.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }
}

/// Result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
