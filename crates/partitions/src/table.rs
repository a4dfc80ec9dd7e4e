//! Memoized restricted partition counts.
//!
//! Samplers over a feasible set ask for the same `(q, k)` pairs many times.
//! [`PartitionTable`] keeps every answer it has computed.

use crate::count;
use crate::error::Result;
use log::debug;
use std::collections::HashMap;

/// Cache of "partitions of `q` into at most `k` parts".
///
/// # Example
///
/// ```
/// use partitions::PartitionTable;
///
/// let mut table = PartitionTable::new();
/// assert_eq!(table.at_most(6, 2)?, 4.0);
/// assert_eq!(table.exact(8, 3)?, 5.0);
/// assert_eq!(table.len(), 2);
/// # Ok::<(), partitions::PartitionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartitionTable {
    counts: HashMap<(usize, usize), f64>,
}

impl PartitionTable {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions of `q` into at most `k` parts.
    ///
    /// Equivalently, partitions of `q` whose largest part is at most `k`.
    /// A failed computation is not cached.
    ///
    /// # Errors
    ///
    /// As [`count::seeded_table`] for a table of size `q`.
    pub fn at_most(&mut self, q: usize, k: usize) -> Result<f64> {
        if let Some(&count) = self.counts.get(&(q, k)) {
            return Ok(count);
        }
        debug!("partition table miss: q={q} k={k}");
        let count = count::at_most(q, k)?;
        self.counts.insert((q, k), count);
        Ok(count)
    }

    /// Partitions of `q` into exactly `n` parts.
    ///
    /// # Errors
    ///
    /// As [`PartitionTable::at_most`] for `(q - n, n)`.
    pub fn exact(&mut self, q: usize, n: usize) -> Result<f64> {
        if q == n {
            return Ok(1.0);
        }
        if q < n || n == 0 {
            return Ok(0.0);
        }
        self.at_most(q - n, n)
    }

    /// Number of cached `(q, k)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Drops every cached count.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::{exact_parts_count, partition_counts, PartsLimit};
    use crate::error::PartitionError;

    #[test]
    fn test_new_is_empty() {
        let table = PartitionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_at_most_agrees_with_uncached() -> Result<()> {
        let mut table = PartitionTable::new();
        for q in 0..=12 {
            let row = partition_counts(12, PartsLimit::AtMost(q))?;
            for k in 0..=12 {
                let expected = partition_counts(q, PartsLimit::AtMost(k))?[q];
                assert_eq!(table.at_most(q, k)?, expected, "q={q} k={k}");
            }
            assert_eq!(table.at_most(12, q)?, row[12]);
        }
        Ok(())
    }

    #[test]
    fn test_exact_agrees_with_uncached() -> Result<()> {
        let mut table = PartitionTable::new();
        for q in 0..=14 {
            for n in 0..=q + 1 {
                assert_eq!(table.exact(q, n)?, exact_parts_count(q, n)?, "q={q} n={n}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_memoizes() -> Result<()> {
        let mut table = PartitionTable::new();
        assert_eq!(table.at_most(10, 3)?, 14.0);
        assert_eq!(table.at_most(10, 3)?, 14.0);
        assert_eq!(table.len(), 1);

        // Edge cases of `exact` never touch the cache.
        assert_eq!(table.exact(4, 4)?, 1.0);
        assert_eq!(table.exact(2, 5)?, 0.0);
        assert_eq!(table.len(), 1);

        table.clear();
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn test_huge_sizes_rejected_and_not_cached() {
        let mut table = PartitionTable::new();
        assert_eq!(
            table.at_most(usize::MAX, 0),
            Err(PartitionError::OutOfRange {
                argument: "n",
                value: usize::MAX as i128,
            })
        );
        assert!(table.exact(usize::MAX, 1).is_err());
        assert!(table.is_empty());
    }
}
