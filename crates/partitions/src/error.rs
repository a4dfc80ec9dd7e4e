//! Errors raised by the partition kernels.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PartitionError>;

/// An argument a kernel refused before touching any buffer.
///
/// Every variant is an invalid-argument failure. The kernels are total on
/// valid input, so no other category exists.
///
/// # Example
///
/// ```
/// use partitions::{accumulate_counts, PartitionError, PartsLimit};
///
/// let mut table = [1.0, 0.0];
/// let err = accumulate_counts(4, PartsLimit::Unlimited, &mut table).unwrap_err();
/// assert_eq!(
///     err,
///     PartitionError::BufferTooSmall { buffer: "table", required: 5, actual: 2 }
/// );
/// assert!(err.is_invalid_argument());
/// assert_eq!(table, [1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A size that must be non-negative was negative.
    #[error("`{argument}` must be non-negative, got {value}")]
    NegativeSize {
        /// Name of the offending argument.
        argument: &'static str,
        /// The value supplied.
        value: i64,
    },
    /// A buffer is shorter than the call requires.
    #[error("`{buffer}` holds {actual} elements but {required} are required")]
    BufferTooSmall {
        /// Name of the undersized buffer.
        buffer: &'static str,
        /// Minimum length the call needs.
        required: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// A value lies outside the range the call can address.
    #[error("`{argument}` is out of range: {value}")]
    OutOfRange {
        /// Name of the offending argument.
        argument: &'static str,
        /// The value supplied, widened for display.
        value: i128,
    },
    /// No partition of `q` has the requested number of parts.
    #[error("no partition of {q} into {n} parts exists")]
    EmptyFeasibleSet {
        /// Total being partitioned.
        q: usize,
        /// Requested number of parts.
        n: usize,
    },
}

impl PartitionError {
    /// Whether this error is an invalid-argument failure. Always true.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeSize { .. }
                | Self::BufferTooSmall { .. }
                | Self::OutOfRange { .. }
                | Self::EmptyFeasibleSet { .. }
        )
    }

    /// Name of the argument or buffer the error refers to.
    #[must_use]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::NegativeSize { argument, .. } | Self::OutOfRange { argument, .. } => *argument,
            Self::BufferTooSmall { buffer, .. } => *buffer,
            Self::EmptyFeasibleSet { .. } => "n",
        }
    }
}

/// Rejects an undersized buffer.
pub(crate) fn require_len(buffer: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        log::debug!("rejecting `{buffer}`: {actual} < {required}");
        return Err(PartitionError::BufferTooSmall {
            buffer,
            required,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = PartitionError::NegativeSize {
            argument: "n",
            value: -3,
        };
        assert_eq!(e.to_string(), "`n` must be non-negative, got -3");

        let e = PartitionError::BufferTooSmall {
            buffer: "conj",
            required: 4,
            actual: 2,
        };
        assert_eq!(e.to_string(), "`conj` holds 2 elements but 4 are required");

        let e = PartitionError::OutOfRange {
            argument: "cursor",
            value: 0,
        };
        assert_eq!(e.to_string(), "`cursor` is out of range: 0");

        let e = PartitionError::EmptyFeasibleSet { q: 3, n: 5 };
        assert_eq!(e.to_string(), "no partition of 3 into 5 parts exists");
        assert_eq!(e.argument(), "n");
        assert!(e.is_invalid_argument());
    }

    #[test]
    fn test_argument_name() {
        let e = PartitionError::BufferTooSmall {
            buffer: "table",
            required: 1,
            actual: 0,
        };
        assert_eq!(e.argument(), "table");
        assert!(e.is_invalid_argument());
    }

    #[test]
    fn test_require_len() {
        assert_eq!(require_len("table", 3, 3), Ok(()));
        assert_eq!(
            require_len("table", 2, 3),
            Err(PartitionError::BufferTooSmall {
                buffer: "table",
                required: 3,
                actual: 2,
            })
        );
    }
}
