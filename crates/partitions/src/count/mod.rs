//! Restricted partition counts.
//!
//! The kernel [`accumulate_counts`] runs the classic coin-change recurrence
//! over a caller-owned table. After it finishes, `table[m]` is the number of
//! partitions of `m` into at most `k` parts. By conjugation that is also the
//! number of partitions of `m` whose largest part is at most `k`.
//!
//! ```text
//! for i in 1..=min(k, n)          part size
//!     for m in i..=n              table index
//!         table[m] += table[m - i]
//! ```
//!
//! The bounded and unrestricted variants differ only in the upper limit of
//! `i`, so one function serves both through [`PartsLimit`].
//!
//! # Example
//!
//! ```
//! use partitions::count::{exact_parts_count, partition_count};
//!
//! assert_eq!(partition_count(10)?, 42.0);
//! // 8 = 6+1+1 = 5+2+1 = 4+3+1 = 4+2+2 = 3+3+2
//! assert_eq!(exact_parts_count(8, 3)?, 5.0);
//! # Ok::<(), partitions::PartitionError>(())
//! ```

use crate::error::{require_len, PartitionError, Result};
use log::{debug, trace};

/// Upper bound on the number of parts a counted partition may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartsLimit {
    /// Any number of parts.
    #[default]
    Unlimited,
    /// At most this many parts.
    AtMost(usize),
}

impl PartsLimit {
    /// The largest part size the recurrence must visit for a table up to `n`.
    ///
    /// Part sizes above `n` cannot reach any index, so the result never
    /// exceeds `n`.
    ///
    /// ```
    /// use partitions::PartsLimit;
    ///
    /// assert_eq!(PartsLimit::Unlimited.effective(7), 7);
    /// assert_eq!(PartsLimit::AtMost(3).effective(7), 3);
    /// assert_eq!(PartsLimit::AtMost(12).effective(7), 7);
    /// ```
    #[must_use]
    pub const fn effective(self, n: usize) -> usize {
        match self {
            Self::Unlimited => n,
            Self::AtMost(k) if k < n => k,
            Self::AtMost(_) => n,
        }
    }
}

impl From<Option<usize>> for PartsLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unlimited, Self::AtMost)
    }
}

/// Fills `table[0..=n]` with restricted partition counts, in place.
///
/// The caller seeds the table with `table[0] = 1.0` and `table[1..=n] = 0.0`
/// (see [`seeded_table`]). Entries past `n` are never read or written.
/// `n = 0` and `AtMost(0)` leave the seed unchanged.
///
/// # Errors
///
/// [`PartitionError::BufferTooSmall`](crate::PartitionError::BufferTooSmall)
/// when `table.len() < n + 1`. The table is untouched in that case.
pub fn accumulate_counts(n: usize, limit: PartsLimit, table: &mut [f64]) -> Result<()> {
    require_len("table", table.len(), n.saturating_add(1))?;
    let parts = limit.effective(n);
    trace!("accumulate_counts: n={n} limit={limit:?} parts={parts}");
    recur(n, parts, table);
    Ok(())
}

// Caller guarantees `table.len() > n` and `parts <= n`.
fn recur(n: usize, parts: usize, table: &mut [f64]) {
    for i in 1..=parts {
        for m in i..=n {
            table[m] += table[m - i];
        }
    }
}

/// A table of length `n + 1` holding the `[1, 0, 0, ...]` seed.
///
/// # Errors
///
/// [`PartitionError::OutOfRange`] when `n + 1` overflows `usize` or the table
/// cannot be allocated.
pub fn seeded_table(n: usize) -> Result<Vec<f64>> {
    let too_large = || PartitionError::OutOfRange {
        argument: "n",
        value: n as i128,
    };
    let len = n.checked_add(1).ok_or_else(too_large)?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| {
        debug!("cannot allocate a partition table for n={n}");
        too_large()
    })?;
    table.resize(len, 0.0);
    table[0] = 1.0;
    Ok(table)
}

/// Counts of partitions of every `m` in `0..=n` under `limit`.
///
/// ```
/// use partitions::{partition_counts, PartsLimit};
///
/// assert_eq!(
///     partition_counts(8, PartsLimit::Unlimited)?,
///     [1.0, 1.0, 2.0, 3.0, 5.0, 7.0, 11.0, 15.0, 22.0]
/// );
/// # Ok::<(), partitions::PartitionError>(())
/// ```
///
/// # Errors
///
/// As [`seeded_table`].
pub fn partition_counts(n: usize, limit: PartsLimit) -> Result<Vec<f64>> {
    let mut table = seeded_table(n)?;
    recur(n, limit.effective(n), &mut table);
    Ok(table)
}

/// The partition number p(n).
///
/// # Errors
///
/// As [`seeded_table`].
pub fn partition_count(n: usize) -> Result<f64> {
    at_most(n, n)
}

/// Number of partitions of `q` into exactly `n` parts.
///
/// Removing one unit from each of the `n` parts maps these one-to-one onto
/// partitions of `q - n` into at most `n` parts.
///
/// # Errors
///
/// As [`seeded_table`], for the table of size `q - n`.
pub fn exact_parts_count(q: usize, n: usize) -> Result<f64> {
    if q == n {
        return Ok(1.0);
    }
    if q < n || n == 0 {
        return Ok(0.0);
    }
    at_most(q - n, n)
}

// Partitions of `q` into at most `k` parts, read off a fresh table.
pub(crate) fn at_most(q: usize, k: usize) -> Result<f64> {
    let table = partition_counts(q, PartsLimit::AtMost(k))?;
    Ok(table[q])
}
