use crate::types::{Record, SupportCount};

/// Number of records containing every item of `candidate`.
///
/// Containment is a set test: extra items in a record don't matter, and
/// neither do duplicates or ordering. An empty candidate is contained in
/// every record.
pub fn count_support<T: PartialEq>(candidate: &[T], records: &[Record<T>]) -> SupportCount {
    records
        .iter()
        .filter(|record| contains_all(record, candidate))
        .count()
}

pub(crate) fn contains_all<T: PartialEq>(record: &[T], candidate: &[T]) -> bool {
    // `all` stops at the first missing item
    candidate.iter().all(|item| record.contains(item))
}
