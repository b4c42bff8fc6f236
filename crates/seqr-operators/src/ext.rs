//! The operator surface: chaining combinators on [`Sequence`].

use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

use seqr_core::{Cursor, Sequence};

use crate::concat::Concat;
use crate::distinct::Distinct;
use crate::group::GroupBy;
use crate::intersect::membership;
use crate::sort::{Direction, OrderCursor};

/// Chaining combinators for lazy sequences.
///
/// Every method builds a new sequence wrapping this one's acquisition
/// capability; no elements are touched until the result is traversed. A
/// panicking caller-supplied closure unwinds to whoever is actively
/// pulling the cursor; nothing here retries or swallows it.
pub trait SequenceExt<T: Clone + 'static> {
    /// Keep elements accepted by `pred`. Pulls upstream until the
    /// predicate accepts or the upstream is exhausted.
    fn filter(&self, pred: impl Fn(&T) -> bool + 'static) -> Sequence<T>;

    /// 1:1 transform. No buffering.
    fn project<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> Sequence<U>;

    /// Suppress repeated elements, keeping first occurrences in order.
    fn distinct(&self) -> Sequence<T>
    where
        T: Eq + Hash;

    /// Suppress elements whose projected key was already seen.
    fn distinct_by<K: Eq + Hash + 'static>(
        &self,
        key: impl Fn(&T) -> K + 'static,
    ) -> Sequence<T>;

    /// Concatenate: this sequence's elements, then each of `others` in
    /// declaration order. Never interleaves.
    fn merge(&self, others: &[Sequence<T>]) -> Sequence<T>;

    /// Keep this sequence's elements whose value occurs in every one of
    /// `others`, in this sequence's order, duplicates included. Each extra
    /// source narrows the membership set. With no other sources this is a
    /// pass-through.
    fn intersect(&self, others: &[Sequence<T>]) -> Sequence<T>
    where
        T: Eq + Hash;

    /// Drop the first `count` elements, then pass through.
    fn skip(&self, count: usize) -> Sequence<T>;

    /// Pass through at most `count` elements, then report exhausted
    /// regardless of upstream state.
    fn take(&self, count: usize) -> Sequence<T>;

    /// Ascending sort under `T`'s total order.
    fn order(&self) -> Sequence<T>
    where
        T: Ord;

    /// Descending sort under `T`'s total order: the exact reverse of
    /// [`order`](SequenceExt::order).
    fn order_desc(&self) -> Sequence<T>
    where
        T: Ord;

    /// Sort under a caller-supplied three-way comparison. The upstream is
    /// consumed in full on the first pull, into an insertion-sorted
    /// buffer.
    fn order_by(
        &self,
        cmp: impl Fn(&T, &T) -> Ordering + 'static,
        direction: Direction,
    ) -> Sequence<T>;

    /// Sort by a derived key. An `Option` key sorts `None` first, so an
    /// absent value compares as the lowest possible value.
    fn order_by_key<K: Ord + 'static>(
        &self,
        key: impl Fn(&T) -> K + 'static,
        direction: Direction,
    ) -> Sequence<T>;

    /// Bucket elements by a derived key. The upstream is consumed once,
    /// on first access of the result.
    fn group_by<K: Eq + Hash + Clone + 'static>(
        &self,
        key: impl Fn(&T) -> K + 'static,
    ) -> GroupBy<K, T>;
}

impl<T: Clone + 'static> SequenceExt<T> for Sequence<T> {
    fn filter(&self, pred: impl Fn(&T) -> bool + 'static) -> Sequence<T> {
        let upstream = self.clone();
        let pred = Rc::new(pred);
        Sequence::from_fn(move || {
            let pred = Rc::clone(&pred);
            Cursor::new(upstream.iterate().filter(move |item| pred(item)))
        })
    }

    fn project<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> Sequence<U> {
        let upstream = self.clone();
        let f = Rc::new(f);
        Sequence::from_fn(move || {
            let f = Rc::clone(&f);
            Cursor::new(upstream.iterate().map(move |item| f(item)))
        })
    }

    fn distinct(&self) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        self.distinct_by(T::clone)
    }

    fn distinct_by<K: Eq + Hash + 'static>(
        &self,
        key: impl Fn(&T) -> K + 'static,
    ) -> Sequence<T> {
        let upstream = self.clone();
        let key: Rc<dyn Fn(&T) -> K> = Rc::new(key);
        Sequence::from_fn(move || {
            Cursor::new(Distinct::new(upstream.iterate(), Rc::clone(&key)))
        })
    }

    fn merge(&self, others: &[Sequence<T>]) -> Sequence<T> {
        let mut sources = vec![self.clone()];
        sources.extend(others.iter().cloned());
        Sequence::from_fn(move || Cursor::new(Concat::new(sources.clone())))
    }

    fn intersect(&self, others: &[Sequence<T>]) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        if others.is_empty() {
            return self.clone();
        }
        let upstream = self.clone();
        let others = others.to_vec();
        Sequence::from_fn(move || {
            // The membership set is built at traversal start, then this
            // sequence streams through it.
            let keep = membership(&others);
            Cursor::new(upstream.iterate().filter(move |item| keep.contains(item)))
        })
    }

    fn skip(&self, count: usize) -> Sequence<T> {
        let upstream = self.clone();
        Sequence::from_fn(move || Cursor::new(upstream.iterate().skip(count)))
    }

    fn take(&self, count: usize) -> Sequence<T> {
        let upstream = self.clone();
        Sequence::from_fn(move || Cursor::new(upstream.iterate().take(count)))
    }

    fn order(&self) -> Sequence<T>
    where
        T: Ord,
    {
        self.order_by(T::cmp, Direction::Ascending)
    }

    fn order_desc(&self) -> Sequence<T>
    where
        T: Ord,
    {
        self.order_by(T::cmp, Direction::Descending)
    }

    fn order_by(
        &self,
        cmp: impl Fn(&T, &T) -> Ordering + 'static,
        direction: Direction,
    ) -> Sequence<T> {
        let upstream = self.clone();
        let cmp: Rc<dyn Fn(&T, &T) -> Ordering> = Rc::new(cmp);
        Sequence::from_fn(move || {
            Cursor::new(OrderCursor::new(
                upstream.iterate(),
                Rc::clone(&cmp),
                direction,
            ))
        })
    }

    fn order_by_key<K: Ord + 'static>(
        &self,
        key: impl Fn(&T) -> K + 'static,
        direction: Direction,
    ) -> Sequence<T> {
        self.order_by(move |a, b| key(a).cmp(&key(b)), direction)
    }

    fn group_by<K: Eq + Hash + Clone + 'static>(
        &self,
        key: impl Fn(&T) -> K + 'static,
    ) -> GroupBy<K, T> {
        GroupBy::new(self.clone(), Rc::new(key))
    }
}
