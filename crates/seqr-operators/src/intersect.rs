//! Intersect stage: N-way membership filter.

use std::collections::HashSet;
use std::hash::Hash;

use seqr_core::Sequence;

/// Builds the membership set for an intersect: the values common to all
/// `others`. Each extra source can only shrink the set.
///
/// Every other source is pulled fully; this runs at traversal start, not
/// at chain-construction time.
pub fn membership<T: Clone + Eq + Hash + 'static>(others: &[Sequence<T>]) -> HashSet<T> {
    let mut sources = others.iter();
    let mut set: HashSet<T> = match sources.next() {
        Some(first) => first.iterate().collect(),
        None => return HashSet::new(),
    };
    for source in sources {
        let keep: HashSet<T> = source.iterate().collect();
        set.retain(|value| keep.contains(value));
    }
    set
}
