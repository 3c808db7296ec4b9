//! Support counting over the subsets of an item universe.
//!
//! Given records (unordered collections of items) this crate reports how many
//! records contain each non-empty subset of the items seen, keyed by a
//! canonical string (`alpha:beta`). A target itemset restricts the result to
//! that one key.
//!
//! ```
//! use subset_support::frequent_subsets;
//!
//! let records = vec![vec!["beta", "theta"], vec!["theta", "alpha", "beta"]];
//! let table = frequent_subsets(&records, Some(&["theta", "beta"][..])).unwrap();
//! assert_eq!(table["beta:theta"], 2);
//! ```
//!
//! The brute-force strategy enumerates `2^n - 1` candidates for a universe of
//! `n` items. Bound `n` with [`Options::max_universe`] or use
//! [`Strategy::LevelWise`] for larger inputs.

pub mod canonical;
pub mod combi;
pub mod error;
pub mod levelwise;
pub mod query;
pub mod subsets;
pub mod support;
pub mod types;
pub mod universe;

#[cfg(feature = "python")]
mod wrapper;

pub use canonical::{canonicalize, Canonical, DELIMITER};
pub use error::SupportError;
pub use query::{frequent_subsets, frequent_subsets_with, Options, Strategy};
pub use subsets::enumerate_non_empty_subsets;
pub use support::count_support;
pub use types::{CanonicalKey, Itemset, Record, SupportCount, SupportTable};
pub use universe::build_universe;
