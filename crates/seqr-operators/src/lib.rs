#![forbid(unsafe_code)]
//! seqr-operators: operator stages over lazy sequences.
//!
//! Design intent:
//! - Every stage is itself a lazy sequence: it captures the upstream's
//!   acquisition capability and layers its own pull logic over a fresh
//!   upstream cursor at traversal time.
//! - Stateless stages (filter/project/skip/take) never buffer more than
//!   one pending element. Stateful stages (distinct/merge/intersect/order/
//!   group) exclusively own whatever buffers they build.
//! - Nothing upstream is aware of downstream stages.

pub mod concat;
pub mod distinct;
pub mod ext;
pub mod group;
pub mod intersect;
pub mod sort;

pub use ext::SequenceExt;
pub use group::{GroupBy, Grouped};
pub use sort::{Direction, SortBuffer};
