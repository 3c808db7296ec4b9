use std::collections::HashMap;

/// Sorted, duplicate-free sequence of items.
pub type Itemset<T> = Vec<T>;
/// One raw record as supplied by the caller. May hold duplicates.
pub type Record<T> = Vec<T>;

pub type CanonicalKey = String;
pub type SupportCount = usize;
pub type SupportTable = HashMap<CanonicalKey, SupportCount>;

pub type ItemsetLength = usize;
