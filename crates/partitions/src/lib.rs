//! Integer partition kernels.
//!
//! Two small numeric routines that a statistical host environment calls
//! with buffers it owns, plus samplers built on top of them:
//!
//! - **Partition counting**: fill a table with the number of partitions of
//!   every `m` in `0..=n` into at most `k` parts.
//! - **Conjugation**: write the conjugate of a partition (the transpose of
//!   its Young diagram) into an output buffer through an advancing cursor.
//! - **Sampling**: draw uniform random partitions of `q` into `n` parts
//!   ([`sample`]), with the lexical extremes of that set in [`lexical`].
//!
//! Both kernels validate every size before touching a buffer. A call that
//! fails leaves its buffers exactly as they were.
//!
//! # Count Layout
//!
//! ```text
//! seed   = [1, 0, 0, 0, 0, 0, 0]
//! k = 2  = [1, 1, 2, 2, 3, 3, 4]     partitions of m into <= 2 parts
//! k = n  = [1, 1, 2, 3, 5, 7, 11]    p(m)
//! ```
//!
//! Counts are `f64`. p(n) leaves the exact `f64` integer range around
//! n = 300, beyond which values are approximations.
//!
//! # Example: Counting
//!
//! ```
//! use partitions::{accumulate_counts, seeded_table, PartsLimit};
//!
//! let mut table = seeded_table(6)?;
//! accumulate_counts(6, PartsLimit::AtMost(2), &mut table)?;
//! assert_eq!(table, [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
//! # Ok::<(), partitions::PartitionError>(())
//! ```
//!
//! # Example: Conjugation
//!
//! ```
//! use partitions::conjugate_into;
//!
//! // The trailing zero is the sentinel that emits the last row's labels.
//! let mut conj = [0usize; 4];
//! let mut cursor = 0;
//! conjugate_into(&[4, 3, 1, 0], &mut cursor, &mut conj)?;
//! assert_eq!(conj, [3, 2, 2, 1]);
//! assert_eq!(cursor, 4);
//! # Ok::<(), partitions::PartitionError>(())
//! ```

// Restricted partition counts (kernel and allocating queries)
pub mod count;

// Conjugate partitions by run-length expansion
pub mod conjugate;

// Error type shared by every kernel
pub mod error;

// Signed, 1-based entry points shaped like the host's calling convention
pub mod host;

// Lexical extremes of partitions into n parts
pub mod lexical;

// Uniform random partitions of a feasible set
pub mod sample;

// Memoized "at most k parts" lookups
pub mod table;

pub use conjugate::{conjugate, conjugate_into, conjugate_len};
pub use count::{
    accumulate_counts, exact_parts_count, partition_count, partition_counts, seeded_table,
    PartsLimit,
};
pub use error::{PartitionError, Result};
pub use sample::{rand_parts, FeasibleSet, Method};
pub use table::PartitionTable;
