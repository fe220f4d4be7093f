#![allow(non_snake_case)]

use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    error::{check_min_support, MiningError, Result},
    itemsets::index::TidIndex,
    types::{FrequentLevel, Item, Itemset, ItemsetCounts, SupportTable, Transaction},
};

/// How candidate supports are computed. Every strategy yields the same
/// counts; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingStrategy {
    /// Scan every transaction for every candidate on the calling thread.
    Sequential,
    /// Same scan, candidates spread over the rayon pool.
    #[default]
    Parallel,
    /// Intersect per-item transaction bitmaps.
    TidIndex,
}

/// Count the support of `candidates` over `transactions` and keep those whose
/// support fraction reaches `min_support`.
///
/// Returns the frequent candidates in canonical order, together with the
/// support fraction of every candidate that was counted (frequent or not).
/// Duplicate candidates are counted once.
pub fn count_support<I: Item>(
    transactions: &[Transaction<I>],
    candidates: &[Itemset<I>],
    min_support: f64,
    strategy: CountingStrategy,
) -> Result<(FrequentLevel<I>, SupportTable<I>)> {
    check_min_support(min_support)?;

    if candidates.is_empty() {
        return Ok((Vec::new(), SupportTable::new()));
    }
    if transactions.is_empty() {
        return Err(MiningError::EmptyTransactions);
    }
    check_cardinality(candidates)?;

    let candidates: Vec<&Itemset<I>> = candidates.iter().unique().collect();
    let counts = match strategy {
        CountingStrategy::Sequential => scan_counts(&candidates, transactions),
        CountingStrategy::Parallel => par_scan_counts(&candidates, transactions),
        CountingStrategy::TidIndex => index_counts(&candidates, transactions),
    };

    let N = transactions.len() as f64;
    let support: SupportTable<I> = counts
        .into_iter()
        .map(|(itemset, count)| (itemset, count as f64 / N))
        .collect();
    let frequent = support
        .iter()
        .filter(|&(_, &fraction)| fraction >= min_support)
        .map(|(itemset, _)| itemset.clone())
        .sorted()
        .collect();

    Ok((frequent, support))
}

fn check_cardinality<I: Item>(candidates: &[Itemset<I>]) -> Result<()> {
    let expected = candidates[0].len();
    match candidates.iter().map(Itemset::len).find(|&len| len != expected) {
        Some(found) => Err(MiningError::MixedCardinality { expected, found }),
        None => Ok(()),
    }
}

/// Number of transactions that include `candidate`.
fn scan_count<I: Item>(candidate: &Itemset<I>, transactions: &[Transaction<I>]) -> usize {
    transactions
        .iter()
        .filter(|transaction| transaction.includes(candidate))
        .count()
}

fn scan_counts<I: Item>(
    candidates: &[&Itemset<I>],
    transactions: &[Transaction<I>],
) -> ItemsetCounts<I> {
    candidates
        .iter()
        .map(|&candidate| (candidate.clone(), scan_count(candidate, transactions)))
        .collect()
}

fn par_scan_counts<I: Item>(
    candidates: &[&Itemset<I>],
    transactions: &[Transaction<I>],
) -> ItemsetCounts<I> {
    candidates
        .par_iter()
        .map(|&candidate| (candidate.clone(), scan_count(candidate, transactions)))
        .collect()
}

fn index_counts<I: Item>(
    candidates: &[&Itemset<I>],
    transactions: &[Transaction<I>],
) -> ItemsetCounts<I> {
    let index = TidIndex::new(transactions);
    candidates
        .par_iter()
        .map(|&candidate| (candidate.clone(), index.count(candidate)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use maplit::hashmap;

    const STRATEGIES: [CountingStrategy; 3] = [
        CountingStrategy::Sequential,
        CountingStrategy::Parallel,
        CountingStrategy::TidIndex,
    ];

    fn transactions(raw: Vec<Vec<u32>>) -> Vec<Transaction<u32>> {
        raw.into_iter().map(Transaction::new).collect()
    }

    fn itemsets(raw: Vec<Vec<u32>>) -> Vec<Itemset<u32>> {
        raw.into_iter().map(Itemset::new).collect()
    }

    #[test]
    fn update_counts() {
        let transactions = transactions(vec![vec![0, 1]]);
        let candidates = itemsets(vec![vec![0], vec![1]]);

        for strategy in STRATEGIES {
            let (frequent, support) =
                count_support(&transactions, &candidates, 0.0, strategy).unwrap();

            assert_eq!(frequent, candidates);
            assert_eq!(
                support,
                hashmap! { Itemset::new(vec![0]) => 1.0, Itemset::new(vec![1]) => 1.0 }
            );
        }
    }

    #[test]
    fn update_counts_with_min_support_1() {
        let transactions = transactions(vec![vec![10, 11], vec![10, 12]]);
        let candidates = itemsets(vec![vec![10], vec![11]]);

        for strategy in STRATEGIES {
            let (frequent, support) =
                count_support(&transactions, &candidates, 1.0, strategy).unwrap();

            assert_eq!(frequent, itemsets(vec![vec![10]]));
            assert_eq!(
                support,
                hashmap! { Itemset::new(vec![10]) => 1.0, Itemset::new(vec![11]) => 0.5 }
            );
        }
    }

    #[test]
    fn update_counts_with_min_support_0_5_1_itemset() {
        let transactions = transactions(vec![
            vec![10, 11],
            vec![10, 15],
            vec![10, 12],
            vec![10, 12],
            vec![10, 12],
            vec![11, 12],
        ]);
        let candidates = itemsets(vec![vec![10], vec![11], vec![12], vec![15]]);

        for strategy in STRATEGIES {
            let (frequent, support) =
                count_support(&transactions, &candidates, 0.5, strategy).unwrap();

            assert_eq!(frequent, itemsets(vec![vec![10], vec![12]]));
            assert_eq!(support[&Itemset::new(vec![10])], 5.0 / 6.0);
            assert_eq!(support[&Itemset::new(vec![12])], 4.0 / 6.0);
            assert_eq!(support[&Itemset::new(vec![11])], 2.0 / 6.0);
            assert_eq!(support[&Itemset::new(vec![15])], 1.0 / 6.0);
        }
    }

    #[test]
    fn update_counts_with_min_support_0_5_2_itemset() {
        let transactions = transactions(vec![
            vec![10, 11],
            vec![10, 15],
            vec![10, 13],
            vec![10, 13],
            vec![10, 13],
            vec![11, 13],
        ]);
        let candidates = itemsets(vec![
            vec![10, 11],
            vec![10, 13],
            vec![10, 15],
            vec![11, 13],
            vec![11, 15],
        ]);

        for strategy in STRATEGIES {
            let (frequent, support) =
                count_support(&transactions, &candidates, 0.5, strategy).unwrap();

            assert_eq!(frequent, itemsets(vec![vec![10, 13]]));
            assert_eq!(support.len(), 5);
            assert_eq!(support[&Itemset::new(vec![11, 15])], 0.0);
        }
    }

    #[test]
    fn exact_threshold_is_frequent() {
        let transactions = transactions(vec![vec![1, 2], vec![1], vec![2], vec![3]]);
        let candidates = itemsets(vec![vec![1], vec![3]]);

        let (frequent, _) =
            count_support(&transactions, &candidates, 0.5, CountingStrategy::Sequential).unwrap();

        assert_eq!(frequent, itemsets(vec![vec![1]]));
    }

    #[test]
    fn exact_threshold_with_inexact_fraction() {
        let transactions = transactions(vec![vec![1], vec![1], vec![1], vec![2], vec![2]]);
        let candidates = itemsets(vec![vec![1], vec![2]]);

        let (frequent, _) =
            count_support(&transactions, &candidates, 0.6, CountingStrategy::Sequential).unwrap();

        assert_eq!(frequent, itemsets(vec![vec![1]]));
    }

    #[test]
    fn scan_count_counts_including_transactions() {
        let transactions = transactions(vec![vec![1, 2, 3], vec![1, 3], vec![2], vec![]]);

        assert_eq!(scan_count(&Itemset::new(vec![1, 3]), &transactions), 2);
        assert_eq!(scan_count(&Itemset::new(vec![2]), &transactions), 2);
        assert_eq!(scan_count(&Itemset::new(vec![1, 2, 3]), &transactions), 1);
        assert_eq!(scan_count(&Itemset::new(vec![4]), &transactions), 0);
    }

    #[test]
    fn duplicate_candidates_counted_once() {
        let transactions = transactions(vec![vec![1, 2], vec![1]]);
        let candidates = itemsets(vec![vec![1], vec![1], vec![2]]);

        for strategy in STRATEGIES {
            let (frequent, support) =
                count_support(&transactions, &candidates, 0.0, strategy).unwrap();

            assert_eq!(frequent, itemsets(vec![vec![1], vec![2]]));
            assert_eq!(
                support,
                hashmap! { Itemset::new(vec![1]) => 1.0, Itemset::new(vec![2]) => 0.5 }
            );
        }
    }

    #[test]
    fn no_candidates() {
        let transactions = transactions(vec![vec![1]]);

        let (frequent, support) =
            count_support(&transactions, &[], 0.5, CountingStrategy::Parallel).unwrap();

        assert!(frequent.is_empty());
        assert!(support.is_empty());
    }

    #[test]
    fn no_candidates_and_no_transactions() {
        let (frequent, support) =
            count_support::<u32>(&[], &[], 0.5, CountingStrategy::Parallel).unwrap();

        assert!(frequent.is_empty());
        assert!(support.is_empty());
    }

    #[test]
    fn no_transactions_is_invalid_input() {
        let candidates = itemsets(vec![vec![1]]);

        for strategy in STRATEGIES {
            let err = count_support(&[], &candidates, 0.5, strategy).unwrap_err();

            assert_eq!(err, MiningError::EmptyTransactions);
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn mixed_cardinality_is_rejected() {
        let transactions = transactions(vec![vec![1, 2]]);
        let candidates = itemsets(vec![vec![1], vec![1, 2]]);

        let err =
            count_support(&transactions, &candidates, 0.5, CountingStrategy::Parallel).unwrap_err();

        assert_eq!(
            err,
            MiningError::MixedCardinality {
                expected: 1,
                found: 2
            }
        );
        assert_eq!(err.kind(), ErrorKind::InconsistentCandidate);
    }

    #[test]
    fn min_support_out_of_range() {
        let transactions = transactions(vec![vec![1]]);
        let candidates = itemsets(vec![vec![1]]);

        let err =
            count_support(&transactions, &candidates, 1.5, CountingStrategy::Parallel).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
