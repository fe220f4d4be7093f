use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    hash::Hash,
    slice::Iter,
};

/// Anything usable as a transaction item: totally ordered, hashable and
/// shareable across the counting workers.
pub trait Item: Ord + Hash + Clone + Send + Sync {}

impl<T: Ord + Hash + Clone + Send + Sync> Item for T {}

pub type ItemsetLength = usize;

pub type ItemsetCounts<I> = HashMap<Itemset<I>, usize>;

/// Support fraction (count / number of transactions) of every counted itemset.
pub type SupportTable<I> = HashMap<Itemset<I>, f64>;

/// Frequent itemsets of one cardinality, in canonical order.
pub type FrequentLevel<I> = Vec<Itemset<I>>;

/// One level per cardinality 1..=K, the last one being empty.
pub type FrequentLevels<I> = Vec<FrequentLevel<I>>;

/// A set of distinct items, stored sorted. Equality, hashing and ordering all
/// go through the sorted representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset<I> {
    items: Vec<I>,
}

impl<I: Item> Itemset<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Itemset { items }
    }

    pub fn singleton(item: I) -> Self {
        Itemset { items: vec![item] }
    }

    /// Caller guarantees `items` is strictly increasing.
    pub(crate) fn from_sorted(items: Vec<I>) -> Self {
        debug_assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
        Itemset { items }
    }

    pub fn len(&self) -> ItemsetLength {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn iter(&self) -> Iter<'_, I> {
        self.items.iter()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// The `len()` subsets obtained by dropping one item at a time.
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset<I>> + '_ {
        (0..self.items.len()).map(move |skip| Itemset {
            items: self
                .items
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, item)| item.clone())
                .collect(),
        })
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Itemset::new(iter)
    }
}

impl<'a, I> IntoIterator for &'a Itemset<I> {
    type Item = &'a I;
    type IntoIter = Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<I: Display> Display for Itemset<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

/// A single transaction: the distinct items bought together, kept sorted so
/// subset tests are a linear merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transaction<I> {
    items: Vec<I>,
}

impl<I: Item> Transaction<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Transaction { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn iter(&self) -> Iter<'_, I> {
        self.items.iter()
    }

    /// Whether every item of `itemset` occurs in this transaction.
    pub fn includes(&self, itemset: &Itemset<I>) -> bool {
        if itemset.len() > self.items.len() {
            return false;
        }
        let mut items = self.items.iter();
        itemset
            .iter()
            .all(|wanted| items.any(|item| item == wanted))
    }
}

impl<I: Item> FromIterator<I> for Transaction<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Transaction::new(iter)
    }
}
