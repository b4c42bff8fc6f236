//! Source adapters: where a sequence's elements come from.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::Cursor;

/// Normalizes heterogeneous sources into a single capability: acquire a
/// fresh cursor. Acquisition is deferred until a traversal actually starts.
pub enum Source<T> {
    /// An owned in-memory collection. Arrays, slices, and `Vec`s all
    /// normalize to this shape; every traversal re-reads from the start.
    Items(Rc<Vec<T>>),

    /// A raw single-pass cursor. The first traversal drains it; every later
    /// traversal observes an empty sequence.
    Once(Rc<RefCell<Option<Box<dyn Iterator<Item = T>>>>>),

    /// A deferred acquisition capability. Operator stages compose by
    /// wrapping the upstream's capability in their own.
    Thunk(Rc<dyn Fn() -> Cursor<T>>),
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Items(items) => Source::Items(Rc::clone(items)),
            Source::Once(slot) => Source::Once(Rc::clone(slot)),
            Source::Thunk(make) => Source::Thunk(Rc::clone(make)),
        }
    }
}

impl<T: Clone + 'static> Source<T> {
    /// Acquire a fresh cursor over this source.
    pub fn acquire(&self) -> Cursor<T> {
        match self {
            Source::Items(items) => {
                let items = Rc::clone(items);
                let len = items.len();
                Cursor::new((0..len).map(move |i| items[i].clone()))
            }
            Source::Once(slot) => match slot.borrow_mut().take() {
                Some(iter) => Cursor::new(iter),
                None => Cursor::empty(),
            },
            Source::Thunk(make) => make(),
        }
    }
}
