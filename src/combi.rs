use itertools::Itertools;

use crate::types::Itemset;

/// Join frequent k-itemsets sharing their first k-1 items into (k+1)-itemset
/// candidates. Input itemsets must each be sorted and of equal length; the
/// output itemsets are sorted too.
pub fn join_step<T: Ord + Clone>(mut itemsets: Vec<Itemset<T>>) -> Vec<Itemset<T>> {
    if itemsets.is_empty() || itemsets[0].is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();

    let mut candidates: Vec<Itemset<T>> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, _) = itemsets[i].split_at(itemsets[i].len() - 1);

        // itemsets are sorted, so everything sharing `prefix` is contiguous
        let group_len = itemsets[i..]
            .iter()
            .take_while(|itemset| itemset.starts_with(prefix))
            .count();
        let tails = itemsets[i..i + group_len].iter().filter_map(|itemset| itemset.last());

        for (a, b) in tails.tuple_combinations() {
            let mut candidate = Vec::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(a.clone());
            candidate.push(b.clone());
            candidates.push(candidate);
        }

        i += group_len;
    }

    candidates
}

/// Drop candidates with a k-subset missing from `frequent`.
pub fn prune_step<T: Ord + Clone>(
    candidates: Vec<Itemset<T>>,
    frequent: &[Itemset<T>],
) -> Vec<Itemset<T>> {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .iter()
                .cloned()
                .combinations(candidate.len() - 1)
                .all(|subset| frequent.binary_search(&subset).is_ok())
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_join_step() {
        let itemsets: Vec<Itemset<u32>> = vec![
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![2, 3, 4],
        ];
        let y = join_step(itemsets);
        assert_eq!(y, vec![vec![1, 2, 3, 4], vec![1, 3, 4, 5]]);
    }

    #[test]
    fn test_join_step_unsorted_input() {
        let itemsets: Vec<Itemset<u32>> = vec![vec![3, 4], vec![1, 3], vec![1, 2], vec![1, 4]];
        let y = join_step(itemsets);
        assert_eq!(y, vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4]]);
    }

    #[test]
    fn test_join_step_singletons() {
        let itemsets = vec![vec!["a"], vec!["b"], vec!["c"]];
        let y = join_step(itemsets);
        assert_eq!(y, vec![vec!["a", "b"], vec!["a", "c"], vec!["b", "c"]]);
    }

    #[test]
    fn test_join_step_empty() {
        assert!(join_step::<u32>(vec![]).is_empty());
        assert!(join_step(vec![vec![1]]).is_empty());
    }

    #[test]
    fn test_prune_step() {
        let frequent = vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![3, 4]];
        let candidates = join_step(frequent.clone());
        // [1, 2, 3] lacks [2, 3], [1, 2, 4] lacks [2, 4]
        assert_eq!(prune_step(candidates, &frequent), vec![vec![1, 3, 4]]);
    }
}
