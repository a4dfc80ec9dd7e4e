//! Conjugate partitions by run-length expansion.
//!
//! Row `i` of a Young diagram (1-based) reaches column `c` exactly when
//! `part[i - 1] >= c`. Walking the rows from the bottom, each difference
//! `part[i - 1] - part[i]` is the number of columns whose height is exactly
//! `i`, so the conjugate is written as one run of label `i` per row:
//!
//! ```text
//! part = [4, 3, 1, 0]          ■ ■ ■ ■
//!                              ■ ■ ■
//! i = 3: 1 - 0 = 1  -> [3]     ■
//! i = 2: 3 - 1 = 2  -> [2, 2]
//! i = 1: 4 - 3 = 1  -> [1]     conj = [3, 2, 2, 1]
//! ```
//!
//! The trailing `0` is a sentinel: without it the columns covered by the last
//! row are not emitted. [`conjugate`] supplies it for you.

use crate::error::{require_len, PartitionError, Result};
use log::trace;

/// Number of labels [`conjugate_into`] writes for `part`.
///
/// Rises between consecutive entries contribute nothing.
#[must_use]
pub fn conjugate_len(part: &[usize]) -> usize {
    part.windows(2)
        .map(|w| w[0].saturating_sub(w[1]))
        .fold(0usize, usize::saturating_add)
}

/// Writes the conjugate row labels of `part` into `conj` starting at
/// `*cursor`, then advances the cursor past them.
///
/// Rows are visited from `part.len() - 1` down to `1`. Row `i` writes the
/// label `i` `part[i - 1] - part[i]` times, and nothing when that difference
/// is not positive. Because the cursor is shared, repeated calls append the
/// conjugates of several partitions into one buffer.
///
/// Partitions of length 0 or 1 write nothing and leave the cursor alone.
///
/// # Errors
///
/// - [`PartitionError::OutOfRange`] when `*cursor` plus the number of labels
///   overflows `usize`.
/// - [`PartitionError::BufferTooSmall`] when `conj` cannot hold them.
///
/// Both are reported before anything is written.
///
/// # Example
///
/// ```
/// use partitions::conjugate_into;
///
/// let mut conj = [0usize; 7];
/// let mut cursor = 0;
/// conjugate_into(&[2, 1, 0], &mut cursor, &mut conj)?;
/// conjugate_into(&[3, 1, 0], &mut cursor, &mut conj)?;
/// assert_eq!(conj, [2, 1, 2, 1, 1, 0, 0]);
/// assert_eq!(cursor, 5);
/// # Ok::<(), partitions::PartitionError>(())
/// ```
pub fn conjugate_into(part: &[usize], cursor: &mut usize, conj: &mut [usize]) -> Result<()> {
    let total = conjugate_len(part);
    let end = cursor
        .checked_add(total)
        .ok_or(PartitionError::OutOfRange {
            argument: "cursor",
            value: *cursor as i128 + total as i128,
        })?;
    require_len("conj", conj.len(), end)?;
    trace!(
        "conjugate_into: l={} cursor={} labels={total}",
        part.len(),
        *cursor
    );

    let mut j = *cursor;
    for i in (1..part.len()).rev() {
        let times = part[i - 1].saturating_sub(part[i]);
        conj[j..j + times].fill(i);
        j += times;
    }
    *cursor = j;
    Ok(())
}

/// The conjugate of `part`, as a new vector.
///
/// Equivalent to [`conjugate_into`] on `part` with a trailing `0` appended.
/// An empty partition has an empty conjugate.
///
/// ```
/// use partitions::conjugate;
///
/// assert_eq!(conjugate(&[4, 3, 1]), [3, 2, 2, 1]);
/// assert_eq!(conjugate(&[3, 2, 2, 1]), [4, 3, 1]);
/// assert!(conjugate(&[]).is_empty());
/// ```
#[must_use]
pub fn conjugate(part: &[usize]) -> Vec<usize> {
    let Some(&last) = part.last() else {
        return Vec::new();
    };
    let l = part.len();
    let mut conj = vec![l; last];
    for i in (1..l).rev() {
        let times = part[i - 1].saturating_sub(part[i]);
        conj.extend(core::iter::repeat(i).take(times));
    }
    conj
}
