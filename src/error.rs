//! Error type for heap operations

use std::fmt;

/// Error type for heap operations
///
/// Calling `find_min` or `extract_min` on an empty heap is not an error;
/// those return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new key is greater than the current key
    KeyNotDecreased,
    /// The handle is no longer valid (entry was extracted or deleted)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyNotDecreased => {
                write!(f, "new key is greater than current key")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (entry was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}
