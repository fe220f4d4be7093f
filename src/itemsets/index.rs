use std::collections::HashMap;

use bitvec::prelude::*;

use crate::types::{Item, Itemset, Transaction};

/// Vertical layout of a transaction collection: for every item, a bitmap with
/// bit `tid` set when transaction `tid` contains the item.
pub struct TidIndex<'t, I> {
    tids: HashMap<&'t I, BitVec>,
    transaction_count: usize,
}

impl<'t, I: Item> TidIndex<'t, I> {
    pub fn new(transactions: &'t [Transaction<I>]) -> Self {
        let transaction_count = transactions.len();
        let mut tids: HashMap<&I, BitVec> = HashMap::new();

        for (tid, transaction) in transactions.iter().enumerate() {
            for item in transaction.iter() {
                tids.entry(item)
                    .or_insert_with(|| bitvec![0; transaction_count])
                    .set(tid, true);
            }
        }

        TidIndex {
            tids,
            transaction_count,
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Number of transactions containing every item of `itemset`.
    pub fn count(&self, itemset: &Itemset<I>) -> usize {
        let mut items = itemset.iter();
        let first = match items.next() {
            Some(item) => item,
            None => return self.transaction_count,
        };
        let mut common = match self.tids.get(first) {
            Some(bits) => bits.clone(),
            None => return 0,
        };
        for item in items {
            match self.tids.get(item) {
                Some(bits) => common &= bits.as_bitslice(),
                None => return 0,
            }
        }
        common.count_ones()
    }
}
