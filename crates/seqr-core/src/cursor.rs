//! Forward-only pull handles.

use crate::error::{Error, Result};

/// A mutable, forward-only, single-pass handle over one traversal.
///
/// A cursor is created each time a [`Sequence`](crate::Sequence) is
/// traversed and lives for that traversal only; once exhausted it cannot be
/// rewound. Abandoning a cursor mid-traversal is safe and needs no cleanup.
///
/// The explicit [`pull`](Cursor::pull) API reports reads past the end as
/// [`Error::Exhausted`]. The `Iterator` impl is the sentinel-style view of
/// the same handle, so `for` loops and adapters work unchanged.
pub struct Cursor<T> {
    inner: Box<dyn Iterator<Item = T>>,
    lookahead: Option<T>,
}

impl<T: 'static> Cursor<T> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            inner: Box::new(iter),
            lookahead: None,
        }
    }

    /// An already-exhausted cursor.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T> Cursor<T> {
    /// True while unread elements remain. May pull one element from the
    /// underlying iterator into the lookahead slot.
    pub fn has_next(&mut self) -> bool {
        if self.lookahead.is_none() {
            self.lookahead = self.inner.next();
        }
        self.lookahead.is_some()
    }

    /// Pull the next element, failing with [`Error::Exhausted`] past the end.
    pub fn pull(&mut self) -> Result<T> {
        self.try_next().ok_or(Error::Exhausted)
    }

    /// Pull the next element, `None` past the end.
    pub fn try_next(&mut self) -> Option<T> {
        self.lookahead.take().or_else(|| self.inner.next())
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.try_next()
    }
}
