//! Single-pass descriptive aggregates.

use seqr_core::{Error, Result, Sequence};

/// Number of elements. A full traversal.
pub fn count<T: Clone + 'static>(seq: &Sequence<T>) -> usize {
    seq.iterate().count()
}

/// Sum of the projected values, folded from the additive identity. The
/// empty sum is `0.0`.
pub fn sum<T: Clone + 'static>(seq: &Sequence<T>, value: impl Fn(&T) -> f64) -> f64 {
    seq.iterate().map(|item| value(&item)).sum()
}

/// Smallest projected value. Fails on an empty sequence.
pub fn min<T: Clone + 'static>(seq: &Sequence<T>, value: impl Fn(&T) -> f64) -> Result<f64> {
    fold_extrema(seq, &value, "min").map(|(lo, _)| lo)
}

/// Largest projected value. Fails on an empty sequence.
pub fn max<T: Clone + 'static>(seq: &Sequence<T>, value: impl Fn(&T) -> f64) -> Result<f64> {
    fold_extrema(seq, &value, "max").map(|(_, hi)| hi)
}

/// `(min, max)` in a single pass. Fails on an empty sequence.
pub fn extrema<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<(f64, f64)> {
    fold_extrema(seq, &value, "extrema")
}

/// `max - min`, tracking both in a single pass.
pub fn amplitude<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<f64> {
    fold_extrema(seq, &value, "amplitude").map(|(lo, hi)| hi - lo)
}

/// Arithmetic mean: `sum / count`, tracking both in a single pass.
pub fn average<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<f64> {
    let mut total = 0.0;
    let mut n = 0usize;
    for item in seq.iterate() {
        total += value(&item);
        n += 1;
    }
    if n == 0 {
        return Err(Error::EmptySequence("average"));
    }
    Ok(total / n as f64)
}

/// The midrange: `(min + max) / 2`, one pass for both extremes.
///
/// Despite the name, this is NOT the arithmetic mean — that is
/// [`average`]. The name follows the engine's established vocabulary and
/// the two are different values in general.
pub fn mean<T: Clone + 'static>(seq: &Sequence<T>, value: impl Fn(&T) -> f64) -> Result<f64> {
    fold_extrema(seq, &value, "mean").map(|(lo, hi)| (lo + hi) / 2.0)
}

/// Single-pass extrema fold seeded by the first element. `stat` names the
/// caller in the empty-sequence error. Comparisons use `total_cmp`.
fn fold_extrema<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: &impl Fn(&T) -> f64,
    stat: &'static str,
) -> Result<(f64, f64)> {
    let mut cursor = seq.iterate();
    let first = cursor.try_next().ok_or(Error::EmptySequence(stat))?;
    let mut lo = value(&first);
    let mut hi = lo;
    for item in cursor {
        let v = value(&item);
        if v.total_cmp(&lo).is_lt() {
            lo = v;
        }
        if v.total_cmp(&hi).is_gt() {
            hi = v;
        }
    }
    Ok((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> Sequence<f64> {
        Sequence::from_values(values.to_vec())
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        assert_eq!(sum(&Sequence::<f64>::empty(), |v| *v), 0.0);
    }

    #[test]
    fn test_amplitude_average_mean_differ() {
        // min 1, max 10: amplitude 9, average 4, midrange 5.5
        let s = seq(&[1.0, 2.0, 3.0, 10.0]);
        assert_eq!(amplitude(&s, |v| *v).unwrap(), 9.0);
        assert_eq!(average(&s, |v| *v).unwrap(), 4.0);
        assert_eq!(mean(&s, |v| *v).unwrap(), 5.5);
    }

    #[test]
    fn test_empty_extrema_fail() {
        let empty = Sequence::<f64>::empty();
        assert!(matches!(
            min(&empty, |v| *v),
            Err(Error::EmptySequence("min"))
        ));
        assert!(matches!(
            max(&empty, |v| *v),
            Err(Error::EmptySequence("max"))
        ));
        assert!(matches!(
            mean(&empty, |v| *v),
            Err(Error::EmptySequence("mean"))
        ));
    }
}
