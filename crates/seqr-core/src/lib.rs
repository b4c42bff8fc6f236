#![forbid(unsafe_code)]
//! seqr-core: source adapters, cursors, and the lazy composition engine.
//!
//! Design intent:
//! - A [`Sequence`] is an immutable recipe for producing a [`Cursor`];
//!   building or chaining one performs zero element access.
//! - Everything is synchronous and single-threaded. Sharing is `Rc`-based;
//!   nothing here blocks, suspends, or spawns.
//! - Operator stages live in `seqr-operators`; they compose by wrapping the
//!   upstream's acquisition capability, never by holding materialized data.

pub mod cursor;
pub mod error;
pub mod sequence;
pub mod source;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use sequence::Sequence;
pub use source::Source;
