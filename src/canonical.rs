use std::fmt::Display;

use itertools::Itertools;

use crate::{
    error::{Result, SupportError},
    types::{CanonicalKey, Itemset},
};

pub const DELIMITER: &str = ":";

/// An itemset in canonical form together with its table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Canonical<T> {
    pub items: Itemset<T>,
    pub key: CanonicalKey,
}

/// Deduplicate, sort ascending and encode.
///
/// Fails if an item's rendering is empty or contains [`DELIMITER`], since
/// either would let two different itemsets share a key.
pub fn canonicalize<T>(items: &[T]) -> Result<Canonical<T>>
where
    T: Ord + Clone + Display,
{
    let items: Itemset<T> = items.iter().sorted().dedup().cloned().collect();
    for item in &items {
        check_item(item)?;
    }
    let key = canonical_key(&items);
    Ok(Canonical { items, key })
}

/// Join already sorted, unique items. No validation.
pub fn canonical_key<T: Display>(sorted_items: &[T]) -> CanonicalKey {
    sorted_items.iter().join(DELIMITER)
}

pub(crate) fn check_item<T: Display>(item: &T) -> Result<()> {
    let rendered = item.to_string();
    if rendered.is_empty() {
        return Err(SupportError::EmptyItem);
    }
    if rendered.contains(DELIMITER) {
        return Err(SupportError::DelimiterInItem(rendered));
    }
    Ok(())
}
