//! Central tendency beyond the average: median and mode.

use std::collections::HashMap;

use seqr_core::{Error, Result, Sequence};
use seqr_operators::{Direction, SequenceExt};

/// Median of the projected values, via a full ascending sort through the
/// order stage. Odd count: the middle element. Even count: the average of
/// the two middle elements.
pub fn median<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64 + 'static,
) -> Result<f64> {
    let sorted = seq
        .project(move |item| value(&item))
        .order_by(f64::total_cmp, Direction::Ascending)
        .to_vec();
    if sorted.is_empty() {
        return Err(Error::EmptySequence("median"));
    }
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Most frequent projected value, from a one-pass occurrence-count map.
///
/// Tie-break rule: among equally frequent values, the first value to reach
/// the maximal count wins — that is, first-seen order decides, not map
/// iteration order.
pub fn mode<T: Clone + 'static>(seq: &Sequence<T>, value: impl Fn(&T) -> f64) -> Result<f64> {
    // Keyed by bit pattern so the map tolerates any f64, NaN included.
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    let mut discovered = 0usize;
    for item in seq.iterate() {
        let bits = value(&item).to_bits();
        let entry = counts.entry(bits).or_insert_with(|| {
            let slot = (0, discovered);
            discovered += 1;
            slot
        });
        entry.0 += 1;
    }
    counts
        .into_iter()
        // Highest count wins; earlier discovery outranks on ties.
        .max_by(|(_, (ca, ia)), (_, (cb, ib))| ca.cmp(cb).then(ib.cmp(ia)))
        .map(|(bits, _)| f64::from_bits(bits))
        .ok_or(Error::EmptySequence("mode"))
}
