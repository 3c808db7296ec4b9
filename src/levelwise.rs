use std::collections::HashMap;
use std::fmt::Display;

use bitvec::prelude::*;
use tracing::{debug, instrument};

use crate::{
    canonical::{canonical_key, Canonical},
    combi::{join_step, prune_step},
    types::{Itemset, ItemsetLength, Record, SupportCount, SupportTable},
};

/// One bit per record, set where the record holds the item (or itemset).
type Cover = BitVec;

/// Level-wise alternative to brute-force enumeration.
///
/// Only itemsets whose support reaches `min_support_count` (at least 1) are
/// reported, so zero-support candidates never appear. Larger itemsets are
/// built from frequent smaller ones and dropped as soon as one of their
/// subsets is infrequent.
#[instrument(skip(records, universe, target), fields(n = universe.len()))]
pub fn frequent_subsets_levelwise<T>(
    records: &[Record<T>],
    universe: &[T],
    target: Option<&Canonical<T>>,
    min_support_count: SupportCount,
) -> SupportTable
where
    T: Ord + Display,
{
    let threshold = min_support_count.max(1);
    let covers = item_covers(records, universe);
    let mut table = SupportTable::new();

    if let Some(target) = target {
        let indices: Option<Vec<usize>> = target
            .items
            .iter()
            .map(|item| universe.binary_search(item).ok())
            .collect();

        if let Some(indices) = indices.filter(|indices| !indices.is_empty()) {
            let cover = indices[1..]
                .iter()
                .fold(covers[indices[0]].clone(), |acc, &idx| {
                    intersect(&acc, &covers[idx])
                });
            let count = cover.count_ones();
            if count >= threshold {
                table.insert(target.key.clone(), count);
            }
        }
        return table;
    }

    let mut level: HashMap<Itemset<usize>, Cover> = covers
        .iter()
        .enumerate()
        .filter(|(_, cover)| cover.count_ones() >= threshold)
        .map(|(idx, cover)| (vec![idx], cover.clone()))
        .collect();
    let mut size: ItemsetLength = 1;

    while !level.is_empty() {
        debug!(size, frequent = level.len(), "level counted");

        for (itemset, cover) in &level {
            let items: Vec<&T> = itemset.iter().map(|&idx| &universe[idx]).collect();
            table.insert(canonical_key(&items), cover.count_ones());
        }

        let mut frequent: Vec<Itemset<usize>> = level.keys().cloned().collect();
        frequent.sort_unstable();
        let candidates = prune_step(join_step(frequent.clone()), &frequent);

        let next: HashMap<Itemset<usize>, Cover> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let (prefix, last) = candidate.split_at(candidate.len() - 1);
                let cover = intersect(level.get(prefix)?, &covers[last[0]]);
                if cover.count_ones() >= threshold {
                    Some((candidate, cover))
                } else {
                    None
                }
            })
            .collect();
        level = next;
        size += 1;
    }

    table
}

fn item_covers<T: Ord>(records: &[Record<T>], universe: &[T]) -> Vec<Cover> {
    let mut covers = vec![BitVec::repeat(false, records.len()); universe.len()];

    for (record_id, record) in records.iter().enumerate() {
        for item in record {
            if let Ok(idx) = universe.binary_search(item) {
                covers[idx].set(record_id, true);
            }
        }
    }

    covers
}

fn intersect(a: &Cover, b: &Cover) -> Cover {
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x && y)
        .collect()
}
