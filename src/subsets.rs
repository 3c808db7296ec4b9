use tracing::{instrument, trace};

use crate::types::Itemset;

/// Every non-empty subset of `universe`, `2^n - 1` of them.
///
/// Built iteratively: starting from `[[]]`, each item doubles the collection
/// by appending itself to a copy of every subset seen so far. The empty
/// subset is dropped at the end. Order is deterministic for a fixed
/// universe but subsets are not sorted relative to each other, so callers
/// canonicalize each one before using it as a key.
///
/// Cost and memory are exponential in `universe.len()`; bounding the
/// universe is up to the caller (see `Options::max_universe`).
#[instrument(skip(universe), fields(n = universe.len()))]
pub fn enumerate_non_empty_subsets<T: Clone>(universe: &[T]) -> Vec<Itemset<T>> {
    let mut subsets: Vec<Itemset<T>> = Vec::with_capacity(1 << universe.len().min(20));
    subsets.push(vec![]);

    for item in universe {
        let extended: Vec<Itemset<T>> = subsets
            .iter()
            .map(|subset| {
                let mut subset = subset.clone();
                subset.push(item.clone());
                subset
            })
            .collect();
        subsets.extend(extended);
    }

    // the empty subset is always first
    subsets.remove(0);
    trace!(count = subsets.len(), "enumerated subsets");
    subsets
}
