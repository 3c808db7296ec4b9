use itertools::Itertools;
use tracing::instrument;

use crate::types::{Itemset, Record};

const APPROX_NUM_UNIQUE_ITEMS: usize = 64; // arbitrary

/// Distinct items across all records, sorted ascending.
///
/// Records are read through shared references and never reordered.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn build_universe<T>(records: &[Record<T>]) -> Itemset<T>
where
    T: Ord + Clone,
{
    let mut items: Vec<&T> = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
    for record in records {
        items.extend(record.iter().sorted());
    }

    items.sort_unstable();
    items.dedup();
    items.into_iter().cloned().collect()
}
