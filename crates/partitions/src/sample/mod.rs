//! Uniform random partitions of `q` into `n` parts.
//!
//! Every partition in the feasible set has a rank in `1..=size`. Ranks are
//! ordered by largest part, smallest first, and the same rule applies to
//! the remainder once the largest part is removed. A partition is built
//! row by row in *conjugate* form: fixing the first row at `n` forces the
//! conjugate to have exactly `n` parts.
//!
//! ```text
//! q = 10, n = 3, size = 8
//!
//! rank  rows (conjugate)          partition
//!    1  [3, 1, 1, 1, 1, 1, 1, 1]  [8, 1, 1]
//!    2  [3, 2, 1, 1, 1, 1, 1]     [7, 2, 1]
//!    3  [3, 2, 2, 1, 1, 1]        [6, 3, 1]
//!    4  [3, 2, 2, 2, 1]           [5, 4, 1]
//!    5  [3, 3, 1, 1, 1, 1]        [6, 2, 2]
//!    6  [3, 3, 2, 1, 1]           [5, 3, 2]
//!    7  [3, 3, 2, 2]              [4, 4, 2]
//!    8  [3, 3, 3, 1]              [4, 3, 3]
//! ```
//!
//! The rank-to-partition routines differ only in how they search:
//!
//! - [`FeasibleSet::bottom_up`] scans candidate parts upwards from 1.
//! - [`FeasibleSet::top_down`] scans downwards from the previous part.
//! - [`FeasibleSet::multiplicity`] places every copy of a part in one step.
//! - [`FeasibleSet::divide_and_conquer`] bisects at random, then redraws the
//!   rank inside the chosen block.
//!
//! The first three are the same bijection. Uniformity comes from drawing the
//! rank uniformly.

use crate::conjugate::conjugate;
use crate::error::{PartitionError, Result};
use crate::table::PartitionTable;
use log::trace;
use rand::Rng;

/// How a sampled rank is turned into a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Search part sizes from 1 upwards.
    BottomUp,
    /// Search part sizes downwards from the previous part.
    TopDown,
    /// Random bisection over part sizes.
    DivideAndConquer,
    /// Place all copies of a part at once.
    Multiplicity,
    /// [`BottomUp`](Method::BottomUp) for small or part-heavy sets,
    /// [`DivideAndConquer`](Method::DivideAndConquer) otherwise.
    #[default]
    Best,
}

impl Method {
    /// The concrete method [`Best`](Method::Best) stands for at `(q, n)`.
    /// Other methods resolve to themselves.
    ///
    /// ```
    /// use partitions::sample::Method;
    ///
    /// assert_eq!(Method::Best.resolve(100, 10), Method::BottomUp);
    /// assert_eq!(Method::Best.resolve(1000, 10), Method::DivideAndConquer);
    /// assert_eq!(Method::Best.resolve(1000, 700), Method::BottomUp);
    /// assert_eq!(Method::TopDown.resolve(1000, 10), Method::TopDown);
    /// ```
    #[must_use]
    pub fn resolve(self, q: usize, n: usize) -> Self {
        match self {
            Self::Best if q < 250 || n as f64 >= q as f64 / 1.5 => Self::BottomUp,
            Self::Best => Self::DivideAndConquer,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Search {
    Ascending,
    Descending,
}

/// The partitions of `q` into `n` parts, optionally padded with zeros.
///
/// Without zeros, members have exactly `n` positive parts. With zeros, members
/// have at most `n` positive parts and are padded with trailing zeros to
/// length `n`.
///
/// # Example
///
/// ```
/// use partitions::sample::FeasibleSet;
/// use partitions::PartitionTable;
///
/// let mut table = PartitionTable::new();
/// let set = FeasibleSet::new(10, 3);
/// assert_eq!(set.size(&mut table)?, 8.0);
/// assert_eq!(set.bottom_up(&mut table, 1)?, [8, 1, 1]);
/// assert_eq!(set.bottom_up(&mut table, 8)?, [4, 3, 3]);
///
/// let padded = FeasibleSet::new(4, 3).with_zeros(true);
/// assert_eq!(padded.bottom_up(&mut table, 1)?, [4, 0, 0]);
/// # Ok::<(), partitions::PartitionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeasibleSet {
    q: usize,
    n: usize,
    zeros: bool,
}

impl FeasibleSet {
    /// Partitions of `q` into exactly `n` positive parts.
    #[must_use]
    pub const fn new(q: usize, n: usize) -> Self {
        Self { q, n, zeros: false }
    }

    /// Whether members may pad with zero parts.
    #[must_use]
    pub const fn with_zeros(self, zeros: bool) -> Self {
        Self { zeros, ..self }
    }

    /// The total `q`.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.q
    }

    /// The number of parts `n`.
    #[must_use]
    pub const fn parts(&self) -> usize {
        self.n
    }

    /// Whether zero parts are allowed.
    #[must_use]
    pub const fn allows_zeros(&self) -> bool {
        self.zeros
    }

    /// Number of members.
    ///
    /// # Errors
    ///
    /// As [`PartitionTable::at_most`].
    pub fn size(&self, table: &mut PartitionTable) -> Result<f64> {
        if self.zeros {
            table.at_most(self.q, self.n)
        } else {
            table.exact(self.q, self.n)
        }
    }

    /// The member of rank `which`, searching part sizes upwards.
    ///
    /// # Errors
    ///
    /// - [`PartitionError::EmptyFeasibleSet`] when the set has no members.
    /// - [`PartitionError::OutOfRange`] when `which` is outside `1..=size`.
    pub fn bottom_up(&self, table: &mut PartitionTable, which: u64) -> Result<Vec<usize>> {
        self.unrank(table, which, Search::Ascending, false)
    }

    /// The member of rank `which`, searching part sizes downwards.
    ///
    /// Same result as [`FeasibleSet::bottom_up`]. Fewer lookups when the
    /// conjugate rows are large.
    ///
    /// # Errors
    ///
    /// As [`FeasibleSet::bottom_up`].
    pub fn top_down(&self, table: &mut PartitionTable, which: u64) -> Result<Vec<usize>> {
        self.unrank(table, which, Search::Descending, false)
    }

    /// The member of rank `which`, placing each part size with all its
    /// copies at once.
    ///
    /// Same result as [`FeasibleSet::bottom_up`].
    ///
    /// # Errors
    ///
    /// As [`FeasibleSet::bottom_up`].
    pub fn multiplicity(&self, table: &mut PartitionTable, which: u64) -> Result<Vec<usize>> {
        self.unrank(table, which, Search::Descending, true)
    }

    /// A uniform member, reached from the starting rank `which` by random
    /// bisection over part sizes.
    ///
    /// Whenever a part is fixed, the rank inside its block is redrawn, so the
    /// result depends on `rng` and not only on `which`.
    ///
    /// # Errors
    ///
    /// As [`FeasibleSet::bottom_up`].
    pub fn divide_and_conquer<R: Rng + ?Sized>(
        &self,
        table: &mut PartitionTable,
        which: u64,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let mut which = self.rank(table, which)?;
        let (mut rows, mut q) = self.start();
        let (mut lo, mut hi) = (1, self.n.min(q));

        while q > 0 {
            if lo > hi {
                return Err(rank_error(which));
            }
            let k = rng.gen_range(lo..=hi);
            let upper = table.at_most(q, k)?;
            let lower = table.at_most(q, k - 1)?;
            if which > upper {
                lo = k + 1;
            } else if which <= lower {
                hi = k - 1;
            } else {
                rows.push(k);
                q -= k;
                which = rng.gen_range(1..=(upper - lower) as u64) as f64;
                lo = 1;
                hi = k.min(q);
            }
        }
        Ok(self.finish(&rows))
    }

    /// A uniformly random member.
    ///
    /// # Errors
    ///
    /// [`PartitionError::EmptyFeasibleSet`] when the set has no members, or
    /// any error of the table lookups.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        table: &mut PartitionTable,
        method: Method,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let size = self.size(table)?;
        if size < 1.0 {
            return Err(self.empty());
        }
        let which = rng.gen_range(1..=size as u64);
        let method = method.resolve(self.q, self.n);
        trace!("sample: q={} n={} which={which} method={method:?}", self.q, self.n);
        match method {
            // `resolve` never yields `Best`.
            Method::BottomUp | Method::Best => self.bottom_up(table, which),
            Method::TopDown => self.top_down(table, which),
            Method::Multiplicity => self.multiplicity(table, which),
            Method::DivideAndConquer => self.divide_and_conquer(table, which, rng),
        }
    }

    fn empty(&self) -> PartitionError {
        PartitionError::EmptyFeasibleSet {
            q: self.q,
            n: self.n,
        }
    }

    // Validates `which` against the set size.
    fn rank(&self, table: &mut PartitionTable, which: u64) -> Result<f64> {
        let size = self.size(table)?;
        if size < 1.0 {
            return Err(self.empty());
        }
        let which = which as f64;
        if which < 1.0 || which > size {
            return Err(rank_error(which));
        }
        Ok(which)
    }

    // Conjugate rows placed so far, and the sum still to place.
    fn start(&self) -> (Vec<usize>, usize) {
        if self.zeros {
            (Vec::new(), self.q)
        } else {
            (vec![self.n], self.q - self.n)
        }
    }

    fn finish(&self, rows: &[usize]) -> Vec<usize> {
        let mut parts = conjugate(rows);
        if self.zeros {
            parts.resize(self.n, 0);
        }
        parts
    }

    fn unrank(
        &self,
        table: &mut PartitionTable,
        which: u64,
        search: Search,
        grouped: bool,
    ) -> Result<Vec<usize>> {
        let mut which = self.rank(table, which)?;
        let (mut rows, mut q) = self.start();
        let mut bound = self.n;

        while q > 0 {
            let (k, below) = choose_part(table, q, bound, which, search)?;
            which -= below;
            let copies = if grouped {
                let (copies, skipped) = copies_of(table, q, k, which)?;
                which -= skipped;
                copies
            } else {
                1
            };
            rows.extend(core::iter::repeat(k).take(copies));
            q -= k * copies;
            bound = k;
        }
        Ok(self.finish(&rows))
    }
}

fn rank_error(which: f64) -> PartitionError {
    PartitionError::OutOfRange {
        argument: "which",
        value: which as i128,
    }
}

/// The part `k` holding rank `which` among partitions of `q` with parts at
/// most `bound`, and the number of partitions ranked before it.
fn choose_part(
    table: &mut PartitionTable,
    q: usize,
    bound: usize,
    which: f64,
    search: Search,
) -> Result<(usize, f64)> {
    let top = bound.min(q);
    match search {
        Search::Ascending => {
            for k in 1..=top {
                if table.at_most(q, k)? >= which {
                    return Ok((k, table.at_most(q, k - 1)?));
                }
            }
        }
        Search::Descending => {
            for k in (1..=top).rev() {
                let below = table.at_most(q, k - 1)?;
                if below < which {
                    return Ok((k, below));
                }
            }
        }
    }
    Err(rank_error(which))
}

/// How many copies of `k` the partition of rank `which` (among those of `q`
/// with largest part exactly `k`) carries, and how many rank before it.
fn copies_of(table: &mut PartitionTable, q: usize, k: usize, which: f64) -> Result<(usize, f64)> {
    let mut skipped = 0.0;
    for copies in 1..=q / k {
        let block = table.at_most(q - k * copies, k - 1)?;
        if skipped + block >= which {
            return Ok((copies, skipped));
        }
        skipped += block;
    }
    Err(rank_error(which))
}

/// `sample_size` uniform random partitions of `q` into `n` parts.
///
/// With `zeros`, partitions have at most `n` positive parts and are padded
/// with zeros to length `n`. `table` carries counts between calls.
///
/// # Errors
///
/// As [`FeasibleSet::sample`].
///
/// # Example
///
/// ```
/// use partitions::sample::{rand_parts, Method};
/// use partitions::PartitionTable;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut table = PartitionTable::new();
/// let parts = rand_parts(20, 4, 5, Method::Best, false, &mut table, &mut rng)?;
/// assert_eq!(parts.len(), 5);
/// assert!(parts.iter().all(|p| p.len() == 4 && p.iter().sum::<usize>() == 20));
/// # Ok::<(), partitions::PartitionError>(())
/// ```
pub fn rand_parts<R: Rng + ?Sized>(
    q: usize,
    n: usize,
    sample_size: usize,
    method: Method,
    zeros: bool,
    table: &mut PartitionTable,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>> {
    let set = FeasibleSet::new(q, n).with_zeros(zeros);
    (0..sample_size)
        .map(|_| set.sample(table, method, rng))
        .collect()
}
