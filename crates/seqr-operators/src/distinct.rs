//! Distinct stage: seen-key suppression.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use seqr_core::Cursor;

/// Suppresses elements whose projected key has been seen before, keeping
/// the first occurrence of each key in upstream order.
///
/// Memory is unbounded in the key cardinality: every distinct key stays in
/// the seen-set for the cursor's lifetime.
pub struct Distinct<T, K> {
    upstream: Cursor<T>,
    key: Rc<dyn Fn(&T) -> K>,
    seen: HashSet<K>,
}

impl<T, K: Eq + Hash> Distinct<T, K> {
    pub fn new(upstream: Cursor<T>, key: Rc<dyn Fn(&T) -> K>) -> Self {
        Self {
            upstream,
            key,
            seen: HashSet::new(),
        }
    }
}

impl<T, K: Eq + Hash> Iterator for Distinct<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let item = self.upstream.try_next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }
}
