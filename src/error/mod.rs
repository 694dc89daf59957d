//! Error types for bytepool.

use std::fmt;

/// Errors that can occur while accessing or resizing a pool.
///
/// Offsets, lengths and widths are `usize` throughout the crate, so the
/// negative-value failures a dynamically typed host would have to check for
/// at runtime simply cannot be constructed here. What remains are genuine
/// runtime conditions: spans that miss the pool, widths the generic integer
/// accessors do not support, and truncation requests that would grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A read or write span falls outside the pool's current bounds,
    /// even partially.
    OutOfRange {
        /// Start offset of the rejected access.
        offset: usize,
        /// Length in bytes of the rejected access.
        len: usize,
        /// Pool size at the time of the access.
        size: usize,
    },

    /// A generic integer accessor was given a width other than 1, 2, 4 or 8.
    UnsupportedWidth {
        /// The rejected width.
        width: usize,
    },

    /// `truncate` was asked for a size larger than the current size.
    CannotGrow {
        /// The requested new size.
        requested: usize,
        /// Pool size at the time of the call.
        size: usize,
    },

    /// A numeric parameter violates a stated precondition.
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::OutOfRange { offset, len, size } => {
                write!(
                    f,
                    "offset out of range: {} bytes at offset {} (pool size {})",
                    len, offset, size
                )
            }
            PoolError::UnsupportedWidth { width } => {
                write!(f, "unsupported integer width: {}", width)
            }
            PoolError::CannotGrow { requested, size } => {
                write!(
                    f,
                    "unable to truncate to grow: requested {} bytes (pool size {})",
                    requested, size
                )
            }
            PoolError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
        }
    }
}

impl std::error::Error for PoolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = PoolError::OutOfRange {
            offset: 7,
            len: 4,
            size: 8,
        };
        let s = err.to_string();
        assert!(s.contains("out of range"));
        assert!(s.contains("offset 7"));
    }

    #[test]
    fn test_display_cannot_grow() {
        let err = PoolError::CannotGrow {
            requested: 10,
            size: 5,
        };
        assert!(err.to_string().contains("truncate to grow"));
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = PoolError::UnsupportedWidth { width: 3 };
        let b = PoolError::UnsupportedWidth { width: 3 };
        assert_eq!(a, b);
    }
}
