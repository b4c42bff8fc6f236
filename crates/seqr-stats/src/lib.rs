#![forbid(unsafe_code)]
//! seqr-stats: the reduce engine and descriptive statistics.
//!
//! Every statistic takes a sequence plus a projection to `f64`. Single-pass
//! aggregates (sum, extrema, average) stream through one cursor; the
//! order-dependent ones (median) go through the order stage; the moment
//! ones (variance, stddev) materialize the projected values once and run
//! their arithmetic passes over the owned buffer.
//!
//! Vocabulary warning: [`describe::mean`] is the midrange `(min + max) / 2`,
//! not the arithmetic mean. The arithmetic mean is [`describe::average`].

pub mod central;
pub mod describe;
pub mod dispersion;
pub mod reduce;

pub use central::{median, mode};
pub use describe::{amplitude, average, count, extrema, max, mean, min, sum};
pub use dispersion::{
    stddev_population, stddev_sample, variance_population, variance_sample,
};
pub use reduce::{fold, reduce};
