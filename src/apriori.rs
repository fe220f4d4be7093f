use std::fmt::{self, Display, Formatter};

use crate::{
    combi::generate_candidates,
    error::{check_min_support, Result},
    itemsets::{count::count_support, seed::create_candidates, CountingStrategy},
    types::{FrequentLevel, FrequentLevels, Item, Itemset, SupportTable, Transaction},
};

/// Level-wise frequent itemset miner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apriori {
    min_support: f64,
    counting: CountingStrategy,
}

impl Apriori {
    pub fn new(min_support: f64) -> Result<Self> {
        check_min_support(min_support)?;
        Ok(Apriori {
            min_support,
            counting: CountingStrategy::default(),
        })
    }

    pub fn with_counting(mut self, counting: CountingStrategy) -> Self {
        self.counting = counting;
        self
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn counting(&self) -> CountingStrategy {
        self.counting
    }

    /// Mine every frequent itemset of `transactions`.
    ///
    /// Level k+1 is generated only from level k, so the loop stops at the
    /// first empty level, which is kept as the last entry of the returned
    /// levels. Any error aborts the whole run.
    pub fn mine<I: Item>(&self, transactions: &[Transaction<I>]) -> Result<FrequentItemsets<I>> {
        let candidates = create_candidates(transactions);
        let (frequent, mut support) =
            count_support(transactions, &candidates, self.min_support, self.counting)?;
        tracing::debug!(
            k = 1,
            candidates = candidates.len(),
            frequent = frequent.len(),
            "counted level"
        );

        let mut levels: FrequentLevels<I> = vec![frequent];
        let mut k = 2;
        while let Some(prev) = levels.last().filter(|level| !level.is_empty()) {
            let candidates = generate_candidates(prev, k)?;
            let (frequent, level_support) =
                count_support(transactions, &candidates, self.min_support, self.counting)?;
            tracing::debug!(
                k,
                candidates = candidates.len(),
                frequent = frequent.len(),
                "counted level"
            );

            support.extend(level_support);
            levels.push(frequent);
            k += 1;
        }

        let itemsets = FrequentItemsets { levels, support };
        tracing::info!(
            transactions = transactions.len(),
            min_support = self.min_support,
            frequent = itemsets.len(),
            counted = itemsets.support.len(),
            "mining finished"
        );

        Ok(itemsets)
    }
}

/// Mine `transactions` with the default counting strategy.
pub fn apriori<I: Item>(
    transactions: &[Transaction<I>],
    min_support: f64,
) -> Result<FrequentItemsets<I>> {
    Apriori::new(min_support)?.mine(transactions)
}

/// Outcome of a mining run: the frequent itemsets level by level, and the
/// support fraction of every itemset that was counted along the way.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<I> {
    levels: FrequentLevels<I>,
    support: SupportTable<I>,
}

impl<I: Item> PartialEq for FrequentItemsets<I> {
    fn eq(&self, other: &Self) -> bool {
        self.levels == other.levels && self.support == other.support
    }
}

impl<I: Item> FrequentItemsets<I> {
    /// All levels, cardinality 1 first, ending with an empty level.
    pub fn levels(&self) -> &[FrequentLevel<I>] {
        &self.levels
    }

    /// Frequent itemsets of cardinality `k` (1-based).
    pub fn level(&self, k: usize) -> Option<&FrequentLevel<I>> {
        k.checked_sub(1).and_then(|index| self.levels.get(index))
    }

    /// Support fraction of `itemset`, if it was counted. Counted itemsets
    /// that fell below the threshold are reported too.
    pub fn support(&self, itemset: &Itemset<I>) -> Option<f64> {
        self.support.get(itemset).copied()
    }

    pub fn support_table(&self) -> &SupportTable<I> {
        &self.support
    }

    /// Frequent itemsets with their support, in level then canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<I>, f64)> + '_ {
        self.levels
            .iter()
            .flatten()
            .map(move |itemset| {
                let support = self.support.get(itemset).copied().unwrap_or_default();
                (itemset, support)
            })
    }

    /// Number of frequent itemsets over all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_parts(self) -> (FrequentLevels<I>, SupportTable<I>) {
        (self.levels, self.support)
    }
}

fn round_support(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 1000.0
}

impl<I: Item + Display> Display for FrequentItemsets<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (itemset, support) in self.iter() {
            writeln!(f, "{}:  sup = {}", itemset, round_support(support))?;
        }
        Ok(())
    }
}
