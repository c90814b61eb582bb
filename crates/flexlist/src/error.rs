//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during list operations.
///
/// Allocation exhaustion is deliberately not represented here: the global
/// allocator aborts the process, and there is nothing a caller could do
/// with such a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index outside the valid range of the operation. Never clamped —
    /// `get`, `remove`, and `insert` all surface this to the caller.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_index_and_len() {
        let err = ListError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of bounds for list of length 3"
        );
    }
}
