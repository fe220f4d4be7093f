use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    error::{MiningError, Result},
    types::{Item, Itemset, ItemsetLength},
};

/// Candidate k-itemsets from the frequent (k-1)-itemsets: join, then prune any
/// candidate with an infrequent (k-1)-subset. The result is sorted and free of
/// duplicates.
pub fn generate_candidates<I: Item>(
    frequent_prev: &[Itemset<I>],
    k: ItemsetLength,
) -> Result<Vec<Itemset<I>>> {
    if k < 2 {
        return Err(MiningError::InvalidCardinality { k });
    }
    if let Some(found) = frequent_prev
        .iter()
        .map(Itemset::len)
        .find(|&len| len != k - 1)
    {
        return Err(MiningError::MixedCardinality {
            expected: k - 1,
            found,
        });
    }

    let mut candidates = join_step(frequent_prev);
    if k > 2 {
        candidates = prune_step(candidates, frequent_prev);
    }
    candidates.sort_unstable();

    Ok(candidates)
}

/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
///
/// Itemsets of equal length that share everything but their last item are
/// merged pairwise. Sorting first puts every such group next to each other.
pub fn join_step<I: Item>(itemsets: &[Itemset<I>]) -> Vec<Itemset<I>> {
    let split: Vec<(&I, &[I])> = itemsets
        .iter()
        .sorted()
        .dedup()
        .filter_map(|itemset| itemset.items().split_last())
        .collect();

    let mut joined = Vec::new();
    for (prefix, group) in &split.into_iter().group_by(|&(_, prefix)| prefix) {
        let tail_items: Vec<&I> = group.map(|(last, _)| last).collect();

        for (a, b) in tail_items.into_iter().tuple_combinations() {
            let mut items = Vec::with_capacity(prefix.len() + 2);
            items.extend_from_slice(prefix);
            items.push(a.clone());
            items.push(b.clone());
            joined.push(Itemset::from_sorted(items));
        }
    }

    joined
}

/// Drops candidates having a (k-1)-subset outside `frequent_prev`.
pub fn prune_step<I: Item>(
    candidates: Vec<Itemset<I>>,
    frequent_prev: &[Itemset<I>],
) -> Vec<Itemset<I>> {
    let frequent_prev: HashSet<&Itemset<I>> = frequent_prev.iter().collect();

    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .immediate_subsets()
                .all(|subset| frequent_prev.contains(&subset))
        })
        .collect()
}
