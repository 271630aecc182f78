use crate::cache_record::{CacheRecord, RecordKey};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::hash_map::Entry;
use tracing::debug;

/// Merge two record sequences, `fresh` taking precedence.
///
/// Every RRset of `fresh` whose key also occurs in `base` replaces all base
/// records with that key, at the position of the first base occurrence.
/// RRsets only present in `fresh` are appended in their original order.
pub fn merge_records(base: Vec<CacheRecord>, fresh: Vec<CacheRecord>) -> Vec<CacheRecord> {
    let mut fresh_groups: FxHashMap<RecordKey, Vec<CacheRecord>> = FxHashMap::default();
    let mut fresh_order: Vec<RecordKey> = Vec::new();

    for record in fresh {
        match fresh_groups.entry(record.key()) {
            Entry::Occupied(entry) => entry.into_mut().push(record),
            Entry::Vacant(entry) => {
                fresh_order.push(entry.key().clone());
                entry.insert(vec![record]);
            }
        }
    }

    let mut merged = Vec::with_capacity(base.len() + fresh_order.len());
    let mut replaced: FxHashSet<RecordKey> = FxHashSet::default();
    let mut superseded = 0usize;

    for record in base {
        let key = record.key();
        if let Some(group) = fresh_groups.remove(&key) {
            merged.extend(group);
            replaced.insert(key);
            superseded += 1;
        } else if replaced.contains(&key) {
            superseded += 1;
        } else {
            merged.push(record);
        }
    }

    let mut appended = 0usize;
    for key in fresh_order {
        if let Some(group) = fresh_groups.remove(&key) {
            appended += group.len();
            merged.extend(group);
        }
    }

    debug!(
        rrsets_replaced = replaced.len(),
        base_records_superseded = superseded,
        fresh_records_appended = appended,
        total = merged.len(),
        "Merged cache dumps"
    );

    merged
}
