//! Entry points shaped like the host environment's calling convention.
//!
//! Statistical hosts hand over 32-bit signed integers, `double` vectors and a
//! 1-based cursor. [`nr_parts`] translates those arguments onto
//! [`crate::count`]; [`conjugate`] runs the expansion of [`crate::conjugate`]
//! directly over the `i32` buffers. Both reject anything they cannot accept
//! safely: negative sizes, a cursor below 1, lengths that disagree with the
//! slices, undersized buffers.
//!
//! Validation completes before the first write. A rejected call leaves every
//! buffer and the cursor unchanged.

use crate::count::{accumulate_counts, PartsLimit};
use crate::error::{require_len, PartitionError, Result};

fn non_negative(argument: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        log::debug!("rejecting `{argument}` = {value}");
        PartitionError::NegativeSize {
            argument,
            value: i64::from(value),
        }
    })
}

/// Fills `table[0..=n]` with counts of partitions into at most `limit` parts,
/// or unrestricted counts when `limit` is `None`.
///
/// The table must hold the `[1, 0, 0, ...]` seed.
///
/// # Errors
///
/// - [`PartitionError::NegativeSize`] for a negative `n` or `limit`.
/// - [`PartitionError::BufferTooSmall`] when `table.len() < n + 1`.
///
/// # Example
///
/// ```
/// use partitions::host;
///
/// let mut table = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// host::nr_parts(5, Some(3), &mut table)?;
/// assert_eq!(table, [1.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// assert!(host::nr_parts(-1, None, &mut table).is_err());
/// # Ok::<(), partitions::PartitionError>(())
/// ```
pub fn nr_parts(n: i32, limit: Option<i32>, table: &mut [f64]) -> Result<()> {
    let n = non_negative("n", n)?;
    let limit = match limit {
        Some(k) => PartsLimit::AtMost(non_negative("k", k)?),
        None => PartsLimit::Unlimited,
    };
    accumulate_counts(n, limit, table)
}

/// Writes the conjugate row labels of `part[..l]` into `conj`, starting at
/// the 1-based position `*cursor`, and advances the cursor.
///
/// Row labels are 1-based. A cursor of `1` writes from `conj[0]`.
///
/// # Errors
///
/// - [`PartitionError::NegativeSize`] for a negative `l` or a negative part.
/// - [`PartitionError::OutOfRange`] when `l > part.len()`, when `*cursor < 1`,
///   or when the advanced cursor would not fit in an `i32`.
/// - [`PartitionError::BufferTooSmall`] when `conj` cannot hold the labels.
///
/// # Example
///
/// ```
/// use partitions::host;
///
/// let part = [4, 3, 1, 0];
/// let mut conj = [0; 4];
/// let mut cursor = 1;
/// host::conjugate(4, &mut cursor, &part, &mut conj)?;
/// assert_eq!(conj, [3, 2, 2, 1]);
/// assert_eq!(cursor, 5);
/// # Ok::<(), partitions::PartitionError>(())
/// ```
pub fn conjugate(l: i32, cursor: &mut i32, part: &[i32], conj: &mut [i32]) -> Result<()> {
    let len = non_negative("l", l)?;
    if len > part.len() {
        return Err(PartitionError::OutOfRange {
            argument: "l",
            value: i128::from(l),
        });
    }
    if *cursor < 1 {
        return Err(PartitionError::OutOfRange {
            argument: "cursor",
            value: i128::from(*cursor),
        });
    }
    let rows = &part[..len];
    for &p in rows {
        non_negative("part", p)?;
    }

    let total = rows
        .windows(2)
        .map(|w| drop_between(w[0], w[1]))
        .fold(0usize, usize::saturating_add);
    let advanced = i32::try_from(total)
        .ok()
        .and_then(|t| cursor.checked_add(t))
        .ok_or(PartitionError::OutOfRange {
            argument: "cursor",
            value: i128::from(*cursor) + total as i128,
        })?;
    let start = non_negative("cursor", *cursor - 1)?;
    require_len("conj", conj.len(), start + total)?;
    log::trace!("host conjugate: l={l} cursor={} labels={total}", *cursor);

    // Windows run from the bottom row up, paired with labels l - 1 down to 1.
    let mut j = start;
    for (label, w) in (1..l).rev().zip(rows.windows(2).rev()) {
        let times = drop_between(w[0], w[1]);
        conj[j..j + times].fill(label);
        j += times;
    }
    *cursor = advanced;
    Ok(())
}

// Both rows are already known to be non-negative, so the difference cannot
// overflow; rises count as zero.
fn drop_between(upper: i32, lower: i32) -> usize {
    usize::try_from(upper - lower).unwrap_or(0)
}
