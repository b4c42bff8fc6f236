//! Single-pass folds.

use seqr_core::Sequence;

/// Seeded left fold over a full traversal. Strictly left-to-right, no
/// short-circuiting; an empty sequence yields the seed unchanged.
pub fn fold<T: Clone + 'static, A>(
    seq: &Sequence<T>,
    seed: A,
    mut f: impl FnMut(A, T) -> A,
) -> A {
    let mut acc = seed;
    for item in seq.iterate() {
        acc = f(acc, item);
    }
    acc
}

/// Seedless left fold: the first pulled element becomes the accumulator
/// and folding starts at the second. An empty sequence yields `None`; a
/// one-element sequence yields that element.
pub fn reduce<T: Clone + 'static>(
    seq: &Sequence<T>,
    mut f: impl FnMut(T, T) -> T,
) -> Option<T> {
    let mut cursor = seq.iterate();
    let mut acc = cursor.try_next()?;
    for item in cursor {
        acc = f(acc, item);
    }
    Some(acc)
}
