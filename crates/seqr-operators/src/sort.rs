//! Order stage: sorts an unbounded pull sequence through an
//! insertion-into-sorted-array buffer.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::rc::Rc;

use seqr_core::Cursor;

/// Pull direction for an ordered cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// An owned, growable buffer kept fully sorted under a three-way
/// comparison.
///
/// Insertion locates the index by binary search (O(log n)) and shifts the
/// tail via `Vec::insert` (O(n)), making a full build from n elements
/// O(n²) worst case. That cost profile is part of the contract: replacing
/// the backing array with a balanced tree would change tie-break and
/// stability behavior.
pub struct SortBuffer<T> {
    items: Vec<T>,
    cmp: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> SortBuffer<T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self::with_shared(Rc::new(cmp))
    }

    pub fn with_shared(cmp: Rc<dyn Fn(&T, &T) -> Ordering>) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert, keeping the buffer sorted. Equal elements land at the first
    /// index where the search terminates; any resulting stability is
    /// incidental, not guaranteed.
    pub fn insert(&mut self, item: T) {
        let at = self.insertion_point(&item);
        self.items.insert(at, item);
    }

    fn insertion_point(&self, item: &T) -> usize {
        let mut lo = 0;
        let mut hi = self.items.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match (self.cmp)(item, &self.items[mid]) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return mid,
            }
        }
        lo
    }

    /// The fully sorted contents, ascending under the comparison.
    pub fn into_sorted(self) -> Vec<T> {
        self.items
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// One-shot realization state for an ordered cursor.
///
/// The consuming pass over the upstream happens exactly once, on the first
/// pull, and the transition is explicit in the type rather than a
/// nullable-field check.
enum OrderState<T> {
    Unrealized {
        upstream: Cursor<T>,
        cmp: Rc<dyn Fn(&T, &T) -> Ordering>,
    },
    Realized(VecDeque<T>),
}

/// Cursor over a fully sorted snapshot of the upstream.
///
/// Ascending pulls from the low end, descending from the high end, so a
/// descending read is the exact reverse of the ascending one.
pub struct OrderCursor<T> {
    state: OrderState<T>,
    direction: Direction,
}

impl<T> OrderCursor<T> {
    pub fn new(
        upstream: Cursor<T>,
        cmp: Rc<dyn Fn(&T, &T) -> Ordering>,
        direction: Direction,
    ) -> Self {
        Self {
            state: OrderState::Unrealized { upstream, cmp },
            direction,
        }
    }

    fn realize(&mut self) {
        match std::mem::replace(&mut self.state, OrderState::Realized(VecDeque::new())) {
            OrderState::Unrealized { upstream, cmp } => {
                let mut buffer = SortBuffer::with_shared(cmp);
                for item in upstream {
                    buffer.insert(item);
                }
                self.state = OrderState::Realized(VecDeque::from(buffer.into_sorted()));
            }
            realized @ OrderState::Realized(_) => self.state = realized,
        }
    }
}

impl<T> Iterator for OrderCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.realize();
        let OrderState::Realized(queue) = &mut self.state else {
            return None;
        };
        match self.direction {
            Direction::Ascending => queue.pop_front(),
            Direction::Descending => queue.pop_back(),
        }
    }
}
