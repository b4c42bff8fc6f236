//! Partition stage and statistics engine, end to end.

use seqr::prelude::*;
use seqr::stats;

#[test]
fn test_group_by_parity_sizes_and_sums() {
    let seq = Sequence::from_values(vec![0, 2, 4, 6, 8, 2, 3, 5, 7, 9]);
    let groups = seq.group_by(|n| n % 2);

    assert_eq!(groups.sizes(), vec![(0, 5), (1, 4)]);
    assert_eq!(groups.sums(|n| f64::from(*n)), vec![(0, 20.0), (1, 24.0)]);
}

#[test]
fn test_group_keys_follow_discovery_order() {
    let seq = Sequence::from_values(vec!["cherry", "apple", "avocado", "banana"]);
    let groups = seq.group_by(|s| s.as_bytes()[0]);
    let keys: Vec<u8> = groups.sizes().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![b'c', b'a', b'b']);
}

#[test]
fn test_buckets_preserve_insertion_order() {
    let seq = Sequence::from_values(vec![1, 4, 2, 7, 5, 8]);
    let groups = seq.group_by(|n| n % 3);
    let grouped = groups.realize();
    assert_eq!(grouped.get(&1), Some(&[1, 4, 7][..]));
    assert_eq!(grouped.get(&2), Some(&[2, 5, 8][..]));
    assert_eq!(grouped.get(&0), None);
    assert_eq!(grouped.len(), 2);
}

#[test]
fn test_groups_expose_as_sequence_of_pairs() {
    let seq = Sequence::from_values(vec![1, 2, 3, 4]);
    let pairs = seq.group_by(|n| n % 2).into_sequence().to_vec();
    assert_eq!(pairs, vec![(1, vec![1, 3]), (0, vec![2, 4])]);
}

#[test]
fn test_amplitude_average_mean_are_three_values() {
    let seq = Sequence::from_values(vec![1.0_f64, 2.0, 3.0, 10.0]);
    let id = |v: &f64| *v;
    let amplitude = stats::amplitude(&seq, id).unwrap();
    let average = stats::average(&seq, id).unwrap();
    let mean = stats::mean(&seq, id).unwrap();
    assert_eq!(amplitude, 9.0);
    assert_eq!(average, 4.0);
    assert_eq!(mean, 5.5);
    assert!(amplitude != average && average != mean);
    // The identities the three are defined by.
    let min = stats::min(&seq, id).unwrap();
    let max = stats::max(&seq, id).unwrap();
    assert_eq!(amplitude, max - min);
    assert_eq!(average, stats::sum(&seq, id) / stats::count(&seq) as f64);
    assert_eq!(mean, (min + max) / 2.0);
}

#[test]
fn test_median_odd_and_even_counts() {
    let odd = Sequence::from_values(vec![3.0_f64, 1.0, 2.0]);
    let even = Sequence::from_values(vec![3.0_f64, 1.0, 2.0, 4.0]);
    assert_eq!(stats::median(&odd, |v| *v).unwrap(), 2.0);
    assert_eq!(stats::median(&even, |v| *v).unwrap(), 2.5);
}

#[test]
fn test_sample_variance_dominates_population() {
    let seq = Sequence::from_values(vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let id = |v: &f64| *v;
    let pop = stats::variance_population(&seq, id).unwrap();
    let samp = stats::variance_sample(&seq, id).unwrap();
    assert_eq!(pop, 4.0);
    assert!(samp > pop);
    assert_eq!(
        stats::stddev_population(&seq, id).unwrap(),
        pop.sqrt()
    );
}

#[test]
fn test_sample_variance_undefined_below_two_elements() {
    let one = Sequence::from_values(vec![4.0_f64]);
    assert!(matches!(
        stats::variance_sample(&one, |v| *v),
        Err(seqr::Error::Undefined { got: 1, .. })
    ));
    let empty = Sequence::<f64>::empty();
    assert!(stats::variance_sample(&empty, |v| *v).is_err());
}

#[test]
fn test_statistics_over_projected_records() {
    // A chained pipeline feeding the statistics engine.
    let ages = Sequence::from_values(vec![("ann", 34), ("bob", 19), ("cid", 28), ("dee", 19)]);
    let adult_ages = ages.filter(|(_, age)| *age >= 18);
    let value = |row: &(&str, i32)| f64::from(row.1);
    assert_eq!(stats::count(&adult_ages), 4);
    assert_eq!(stats::sum(&adult_ages, value), 100.0);
    assert_eq!(stats::average(&adult_ages, value).unwrap(), 25.0);
    assert_eq!(stats::mode(&adult_ages, value).unwrap(), 19.0);
    assert_eq!(stats::median(&adult_ages, value).unwrap(), 23.5);
}
