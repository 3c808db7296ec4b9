use std::fmt::Display;

use tracing::{debug, instrument, warn};

use crate::{
    canonical::{canonicalize, check_item, Canonical},
    error::{Result, SupportError},
    levelwise::frequent_subsets_levelwise,
    subsets::enumerate_non_empty_subsets,
    support::count_support,
    types::{Itemset, Record, SupportCount, SupportTable},
    universe::build_universe,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Count every non-empty subset of the universe, zero-support ones included.
    BruteForce,
    /// Grow itemsets level by level, keeping only those with at least
    /// `min_support_count` supporting records.
    LevelWise { min_support_count: SupportCount },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::BruteForce
    }
}

#[derive(Debug, Clone)]
pub struct Options<T> {
    pub target: Option<Itemset<T>>,
    pub strategy: Strategy,
    /// Refuse universes with more distinct items than this.
    pub max_universe: Option<usize>,
}

impl<T> Default for Options<T> {
    fn default() -> Self {
        Options {
            target: None,
            strategy: Strategy::default(),
            max_universe: None,
        }
    }
}

impl<T> Options<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: Itemset<T>) -> Self {
        self.target = Some(target);
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn max_universe(mut self, limit: usize) -> Self {
        self.max_universe = Some(limit);
        self
    }
}

/// Support of every non-empty subset of the items seen in `records`, or of
/// `target` alone when given.
///
/// Keys are canonical (`beta:theta`). Every candidate is seeded at zero, so
/// subsets that never co-occur are reported with a count of 0. A target
/// with an item absent from all records yields an empty table.
pub fn frequent_subsets<T>(records: &[Record<T>], target: Option<&[T]>) -> Result<SupportTable>
where
    T: Ord + Clone + Display,
{
    let options = Options {
        target: target.map(|target| target.to_vec()),
        ..Options::default()
    };
    frequent_subsets_with(records, &options)
}

#[instrument(skip(records, options), fields(num_records = records.len()))]
pub fn frequent_subsets_with<T>(records: &[Record<T>], options: &Options<T>) -> Result<SupportTable>
where
    T: Ord + Clone + Display,
{
    let universe = build_universe(records);
    universe.iter().try_for_each(check_item)?;
    debug!(size = universe.len(), "built universe");

    if let Some(limit) = options.max_universe {
        if universe.len() > limit {
            warn!(size = universe.len(), limit, "universe too large");
            return Err(SupportError::UniverseTooLarge {
                size: universe.len(),
                limit,
            });
        }
    }

    let target = options
        .target
        .as_deref()
        .map(canonicalize)
        .transpose()?;

    let table = match options.strategy {
        Strategy::BruteForce => brute_force(records, &universe, target.as_ref())?,
        Strategy::LevelWise { min_support_count } => {
            frequent_subsets_levelwise(records, &universe, target.as_ref(), min_support_count)
        }
    };
    debug!(entries = table.len(), "support table ready");

    Ok(table)
}

fn brute_force<T>(
    records: &[Record<T>],
    universe: &[T],
    target: Option<&Canonical<T>>,
) -> Result<SupportTable>
where
    T: Ord + Clone + Display,
{
    let mut candidates = enumerate_non_empty_subsets(universe)
        .iter()
        .map(|subset| canonicalize(subset.as_slice()))
        .collect::<Result<Vec<_>>>()?;
    debug!(candidates = candidates.len(), "enumerated candidates");

    if let Some(target) = target {
        candidates.retain(|candidate| candidate.key == target.key);
    }

    let mut table = SupportTable::with_capacity(candidates.len());
    for candidate in candidates {
        let count = table.entry(candidate.key).or_insert(0);
        *count += count_support(&candidate.items, records);
    }

    Ok(table)
}
