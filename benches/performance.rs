use criterion::{criterion_group, criterion_main, Criterion};
use seqr::prelude::*;
use seqr::stats;

/// Deterministic pseudo-shuffled input so runs are comparable.
fn scrambled(n: usize) -> Vec<i64> {
    (0..n).map(|i| ((i * 7919) % n) as i64).collect()
}

fn bench_order_stage(c: &mut Criterion) {
    let values = scrambled(1024);
    c.bench_function("order_1024", |b| {
        b.iter(|| {
            let seq = Sequence::from_values(values.clone()).order();
            let sorted = seq.to_vec();
            assert_eq!(sorted.len(), values.len());
        })
    });
}

fn bench_describe(c: &mut Criterion) {
    let values: Vec<f64> = scrambled(4096).into_iter().map(|v| v as f64).collect();
    let seq = Sequence::from_values(values);
    c.bench_function("describe_4096", |b| {
        b.iter(|| {
            let id = |v: &f64| *v;
            let _ = stats::average(&seq, id).unwrap();
            let _ = stats::variance_population(&seq, id).unwrap();
            let _ = stats::extrema(&seq, id).unwrap();
        })
    });
}

fn bench_group_by(c: &mut Criterion) {
    let values = scrambled(4096);
    c.bench_function("group_by_4096", |b| {
        b.iter(|| {
            let groups = Sequence::from_values(values.clone()).group_by(|v| v % 16);
            assert_eq!(groups.sizes().len(), 16);
        })
    });
}

criterion_group!(benches, bench_order_stage, bench_describe, bench_group_by);
criterion_main!(benches);
