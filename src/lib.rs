#![forbid(unsafe_code)]
//! seqr: a lazily-evaluated query/aggregation engine over in-memory
//! sequences.
//!
//! Build a [`Sequence`] from an array, a collection, or a raw cursor;
//! chain operator stages (filter, project, distinct, merge, intersect,
//! skip, take, order, group); finish with a traversal, a reduce, or a
//! statistic. Nothing touches the data until the result is pulled.
//!
//! ```
//! use seqr::prelude::*;
//!
//! let evens = Sequence::from_values(vec![4, 1, 3, 2, 4])
//!     .filter(|n| n % 2 == 0)
//!     .distinct()
//!     .order();
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! ```
//!
//! Vocabulary warning carried over from the original system:
//! [`stats::mean`] is the midrange `(min + max) / 2`, while the arithmetic
//! mean is [`stats::average`].

pub use seqr_core::{Cursor, Error, Result, Sequence, Source};
pub use seqr_operators::{Direction, GroupBy, Grouped, SequenceExt, SortBuffer};

pub use seqr_io as io;
pub use seqr_stats as stats;

pub mod prelude {
    pub use seqr_core::{Cursor, Sequence};
    pub use seqr_operators::{Direction, SequenceExt};
}
