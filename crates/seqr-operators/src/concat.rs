//! Merge stage: N-way concatenation.

use std::collections::VecDeque;

use seqr_core::{Cursor, Sequence};

/// Concatenates upstream sequences in declaration order, exhausting each
/// before advancing to the next. Never interleaves.
///
/// Each source's cursor is acquired only when the previous source is
/// exhausted, so a merge over single-pass sources drains them one at a
/// time.
pub struct Concat<T> {
    pending: VecDeque<Sequence<T>>,
    current: Option<Cursor<T>>,
}

impl<T: Clone + 'static> Concat<T> {
    pub fn new(sources: Vec<Sequence<T>>) -> Self {
        Self {
            pending: sources.into(),
            current: None,
        }
    }
}

impl<T: Clone + 'static> Iterator for Concat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(cursor) = self.current.as_mut() {
                if let Some(item) = cursor.try_next() {
                    return Some(item);
                }
                self.current = None;
            }
            let next_source = self.pending.pop_front()?;
            self.current = Some(next_source.iterate());
        }
    }
}
