//! Partition stage: bucket elements by a derived key.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use seqr_core::Sequence;

/// The realized key → bucket mapping.
///
/// Keys iterate in discovery order, insertion order within a bucket is
/// preserved, and every upstream element lands in exactly one bucket, so
/// memory is proportional to the total element count.
pub struct Grouped<K, T> {
    keys: Vec<K>,
    buckets: HashMap<K, Vec<T>>,
}

impl<K: Eq + Hash + Clone, T> Grouped<K, T> {
    fn build(items: impl Iterator<Item = T>, key_fn: &dyn Fn(&T) -> K) -> Self {
        let mut keys = Vec::new();
        let mut buckets: HashMap<K, Vec<T>> = HashMap::new();
        for item in items {
            let key = key_fn(&item);
            if let Some(bucket) = buckets.get_mut(&key) {
                bucket.push(item);
            } else {
                keys.push(key.clone());
                buckets.insert(key, vec![item]);
            }
        }
        Self { keys, buckets }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The bucket for `key`, if any element produced it.
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Iterate `(key, bucket)` pairs in key discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.keys
            .iter()
            .map(move |key| (key, self.buckets.get(key).map_or(&[][..], Vec::as_slice)))
    }
}

/// Lazy group-by stage.
///
/// The upstream cursor is consumed exactly once, on first access; the
/// one-shot pass is guarded by an init-once cell so the contract is
/// visible in the type, not a nullable-field check.
pub struct GroupBy<K, T> {
    upstream: Sequence<T>,
    key_fn: Rc<dyn Fn(&T) -> K>,
    realized: OnceCell<Grouped<K, T>>,
}

impl<K: Eq + Hash + Clone + 'static, T: Clone + 'static> GroupBy<K, T> {
    pub fn new(upstream: Sequence<T>, key_fn: Rc<dyn Fn(&T) -> K>) -> Self {
        Self {
            upstream,
            key_fn,
            realized: OnceCell::new(),
        }
    }

    /// The realized mapping, built on first call.
    pub fn realize(&self) -> &Grouped<K, T> {
        self.realized
            .get_or_init(|| Grouped::build(self.upstream.iterate(), self.key_fn.as_ref()))
    }

    /// Bucket sizes in key discovery order.
    pub fn sizes(&self) -> Vec<(K, usize)> {
        self.realize()
            .iter()
            .map(|(key, bucket)| (key.clone(), bucket.len()))
            .collect()
    }

    /// Per-bucket sums of a numeric projection, in key discovery order.
    pub fn sums(&self, value: impl Fn(&T) -> f64) -> Vec<(K, f64)> {
        self.realize()
            .iter()
            .map(|(key, bucket)| (key.clone(), bucket.iter().map(&value).sum()))
            .collect()
    }

    /// Expose the mapping as a sequence of `(key, bucket)` pairs.
    pub fn into_sequence(self) -> Sequence<(K, Vec<T>)> {
        let grouped = match self.realized.into_inner() {
            Some(grouped) => grouped,
            None => Grouped::build(self.upstream.iterate(), self.key_fn.as_ref()),
        };
        let Grouped { keys, mut buckets } = grouped;
        let pairs: Vec<(K, Vec<T>)> = keys
            .into_iter()
            .map(|key| {
                let bucket = buckets.remove(&key).unwrap_or_default();
                (key, bucket)
            })
            .collect();
        Sequence::from_values(pairs)
    }
}
