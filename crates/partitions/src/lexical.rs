//! Extremes of the lexical order on partitions of `q` into `n` parts.
//!
//! Partitions of `q` into exactly `n` positive parts run in lexical order from
//! `[q - n + 1, 1, ..., 1]` down to the most even partition. These helpers
//! answer `None` when no such partition exists (`q < n`, or `n = 0 < q`).

fn feasible(q: usize, n: usize) -> bool {
    n <= q && (n > 0 || q == 0)
}

/// The smallest possible largest part of a partition of `q` into `n` parts.
///
/// ```
/// use partitions::lexical::min_max;
///
/// assert_eq!(min_max(10, 3), Some(4));
/// assert_eq!(min_max(9, 3), Some(3));
/// assert_eq!(min_max(2, 3), None);
/// ```
#[must_use]
pub fn min_max(q: usize, n: usize) -> Option<usize> {
    if !feasible(q, n) {
        return None;
    }
    if n == 0 {
        return Some(0);
    }
    Some(q.div_ceil(n))
}

/// The last partition of `q` into `n` parts in lexical order, whose parts
/// differ by at most one.
///
/// ```
/// use partitions::lexical::most_even_partition;
///
/// assert_eq!(most_even_partition(10, 3), Some(vec![4, 3, 3]));
/// assert_eq!(most_even_partition(12, 4), Some(vec![3, 3, 3, 3]));
/// ```
#[must_use]
pub fn most_even_partition(q: usize, n: usize) -> Option<Vec<usize>> {
    if !feasible(q, n) {
        return None;
    }
    if n == 0 {
        return Some(Vec::new());
    }
    let (base, extra) = (q / n, q % n);
    Some((0..n).map(|j| base + usize::from(j < extra)).collect())
}

/// The first partition of `q` into `n` parts in lexical order whose largest
/// part is `largest`. With `None`, the first partition overall.
///
/// Returns `None` when `largest` lies outside `min_max(q, n)..=q - n + 1`.
///
/// ```
/// use partitions::lexical::first_part;
///
/// assert_eq!(first_part(10, 3, None), Some(vec![8, 1, 1]));
/// assert_eq!(first_part(10, 3, Some(5)), Some(vec![5, 4, 1]));
/// assert_eq!(first_part(10, 3, Some(3)), None);
/// ```
#[must_use]
pub fn first_part(q: usize, n: usize, largest: Option<usize>) -> Option<Vec<usize>> {
    if !feasible(q, n) {
        return None;
    }
    if n == 0 {
        return Some(Vec::new());
    }
    let top = q - n + 1;
    let mut k = largest.unwrap_or(top);
    if k > top || Some(k) < min_max(q, n) {
        return None;
    }

    let mut part = Vec::with_capacity(n);
    let (mut q, mut n) = (q, n);
    while q > 0 {
        k = k.min(q - n + 1);
        part.push(k);
        q -= k;
        n -= 1;
    }
    Some(part)
}
