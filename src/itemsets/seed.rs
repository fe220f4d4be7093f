use itertools::Itertools;

use crate::types::{Item, Itemset, Transaction};

/// Candidate 1-itemsets: every distinct item across `transactions`, in item
/// order.
pub fn create_candidates<I: Item>(transactions: &[Transaction<I>]) -> Vec<Itemset<I>> {
    transactions
        .iter()
        .flat_map(Transaction::iter)
        .sorted()
        .dedup()
        .cloned()
        .map(Itemset::singleton)
        .collect()
}
