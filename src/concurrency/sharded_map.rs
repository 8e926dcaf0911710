//! A bucketed accumulator for concurrent relevance summation, ported from
//! `original_source/search-server/concurrent_map.h`'s `ConcurrentMap`. Each
//! bucket guards its own `BTreeMap` behind a `parking_lot::Mutex`, so writers
//! touching different buckets never contend.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::core::types::DocumentId;

/// A document-id-keyed accumulator sharded across `bucket_count` buckets,
/// each independently lockable.
pub struct ShardedMap {
    buckets: Vec<Mutex<BTreeMap<DocumentId, f64>>>,
}

impl ShardedMap {
    /// `bucket_count` is the caller's choice; callers summing relevance over
    /// a query's plus terms typically pick `max(plus_term_count, 100)` so
    /// buckets stay finer than the term count without over-allocating for
    /// tiny queries.
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let buckets = (0..bucket_count).map(|_| Mutex::new(BTreeMap::new())).collect();
        ShardedMap { buckets }
    }

    fn bucket_for(&self, id: DocumentId) -> &Mutex<BTreeMap<DocumentId, f64>> {
        let index = (id.value().rem_euclid(self.buckets.len() as i64)) as usize;
        &self.buckets[index]
    }

    /// Add `amount` to `id`'s running total, inserting a zero entry first if
    /// this is the first contribution.
    pub fn add(&self, id: DocumentId, amount: f64) {
        let mut bucket = self.bucket_for(id).lock();
        *bucket.entry(id).or_insert(0.0) += amount;
    }

    /// Collapse the shards into a single ordered map, consuming `self`.
    /// Mirrors `ConcurrentMap::BuildOrdinaryMap`.
    pub fn into_ordinary_map(self) -> BTreeMap<DocumentId, f64> {
        let mut merged = BTreeMap::new();
        for bucket in self.buckets {
            merged.extend(bucket.into_inner());
        }
        merged
    }
}
