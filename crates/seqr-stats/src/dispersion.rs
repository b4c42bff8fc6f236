//! Dispersion: variance and standard deviation, population and sample.

use seqr_core::{Error, Result, Sequence};

/// Population variance: `Σ(x − average)² / n`.
pub fn variance_population<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<f64> {
    let (sum_sq_dev, n) = squared_deviations(seq, &value, "population variance")?;
    Ok(sum_sq_dev / n as f64)
}

/// Sample variance: `Σ(x − average)² / (n − 1)`. Undefined for `n ≤ 1`.
pub fn variance_sample<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<f64> {
    let (sum_sq_dev, n) = squared_deviations(seq, &value, "sample variance")?;
    if n < 2 {
        return Err(Error::Undefined {
            stat: "sample variance",
            need: 2,
            got: n,
        });
    }
    Ok(sum_sq_dev / (n - 1) as f64)
}

/// Square root of the population variance.
pub fn stddev_population<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<f64> {
    variance_population(seq, value).map(f64::sqrt)
}

/// Square root of the sample variance. Undefined for `n ≤ 1`.
pub fn stddev_sample<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: impl Fn(&T) -> f64,
) -> Result<f64> {
    variance_sample(seq, value).map(f64::sqrt)
}

/// `(Σ(x − average)², n)`. The projected values are materialized once so
/// the average pass and the deviation pass run over the owned buffer; a
/// single-pass upstream source is only traversed once.
fn squared_deviations<T: Clone + 'static>(
    seq: &Sequence<T>,
    value: &impl Fn(&T) -> f64,
    stat: &'static str,
) -> Result<(f64, usize)> {
    let values: Vec<f64> = seq.iterate().map(|item| value(&item)).collect();
    if values.is_empty() {
        return Err(Error::EmptySequence(stat));
    }
    let n = values.len();
    let average = values.iter().sum::<f64>() / n as f64;
    let sum_sq_dev: f64 = values.iter().map(|v| (v - average).powi(2)).sum();
    Ok((sum_sq_dev, n))
}
