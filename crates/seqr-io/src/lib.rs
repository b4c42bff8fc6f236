#![forbid(unsafe_code)]
//! seqr-io: loaders and formatters around the engine.
//!
//! This crate sits at the engine's boundary: the CSV loader turns a headed
//! file into labeled records and hands them to the engine through the same
//! source-shape contract as any collection; the join formatter consumes
//! only in-order traversal. The engine itself never does I/O.

pub mod csv;
pub mod error;
pub mod join;

pub use crate::csv::{Dataset, Record};
pub use error::{IoError, Result};
pub use join::{join, join_sequence, Fragment};
