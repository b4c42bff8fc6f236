//! The lazy composition engine.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::source::Source;

/// An immutable description of how to produce a cursor.
///
/// Building or chaining a `Sequence` performs zero element access; work
/// happens only when [`iterate`](Sequence::iterate) is called and the
/// resulting cursor is pulled. Cloning is cheap and shares the source.
///
/// Concurrent re-traversal is only meaningful over repeatable sources
/// (collections); two traversals of a sequence built over a raw cursor
/// race to consume it, and the loser sees nothing.
pub struct Sequence<T> {
    source: Source<T>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// A repeatable sequence over an owned collection.
    pub fn from_values(items: impl Into<Vec<T>>) -> Self {
        Self {
            source: Source::Items(Rc::new(items.into())),
        }
    }

    /// A sequence over a raw single-pass cursor. The first traversal
    /// consumes it; any later traversal is empty.
    pub fn from_cursor<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            source: Source::Once(Rc::new(RefCell::new(Some(Box::new(iter))))),
        }
    }

    /// A sequence whose cursor is built by `make` at each traversal.
    ///
    /// This is the composition hook operator stages use: `make` captures
    /// the upstream sequence and layers the stage's pull logic over a
    /// freshly acquired upstream cursor.
    pub fn from_fn(make: impl Fn() -> Cursor<T> + 'static) -> Self {
        Self {
            source: Source::Thunk(Rc::new(make)),
        }
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        Self::from_values(Vec::new())
    }

    /// A sequence of `count` generated elements, `f(0)` through
    /// `f(count - 1)`. A zero count is rejected here, at call time.
    pub fn generate(count: usize, f: impl Fn(usize) -> T + 'static) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidArgument(
                "generate requires a positive count".into(),
            ));
        }
        let f = Rc::new(f);
        Ok(Self::from_fn(move || {
            let f = Rc::clone(&f);
            Cursor::new((0..count).map(move |i| f(i)))
        }))
    }

    /// Acquire a fresh cursor: the one capability a sequence exposes.
    pub fn iterate(&self) -> Cursor<T> {
        self.source.acquire()
    }

    /// Number of elements. A full traversal.
    pub fn count(&self) -> usize {
        self.iterate().count()
    }

    /// Materialize into a `Vec`. A full traversal.
    pub fn to_vec(&self) -> Vec<T> {
        self.iterate().collect()
    }
}

impl<T: Clone + 'static> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect::<Vec<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_source_is_repeatable() {
        let seq = Sequence::from_values(vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_cursor_source_is_single_pass() {
        let seq = Sequence::from_cursor(vec![1, 2, 3].into_iter());
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_generate_rejects_zero_count_eagerly() {
        let result = Sequence::generate(0, |i| i as i32);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_generate_defers_the_closure() {
        let seq = Sequence::generate(3, |i| i * 10).unwrap();
        assert_eq!(seq.to_vec(), vec![0, 10, 20]);
        // Thunk sources re-run the generator per traversal.
        assert_eq!(seq.to_vec(), vec![0, 10, 20]);
    }
}
