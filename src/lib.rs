//! Frequent itemset mining with the level-wise Apriori search.
//!
//! ```
//! use apriori::{apriori, Itemset, Transaction};
//!
//! let transactions: Vec<Transaction<&str>> = vec![
//!     Transaction::new(vec!["bread", "milk"]),
//!     Transaction::new(vec!["bread", "butter"]),
//!     Transaction::new(vec!["bread", "milk", "butter"]),
//! ];
//! let frequent = apriori(&transactions, 0.6).unwrap();
//!
//! assert_eq!(frequent.support(&Itemset::new(vec!["bread", "milk"])), Some(2.0 / 3.0));
//! ```

mod apriori;
pub mod combi;
pub mod dataset;
pub mod error;
pub mod itemsets;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use crate::apriori::{apriori, Apriori, FrequentItemsets};
pub use crate::combi::generate_candidates;
pub use crate::error::{ErrorKind, MiningError, Result};
pub use crate::itemsets::{count::count_support, seed::create_candidates, CountingStrategy};
pub use crate::types::{
    FrequentLevel, FrequentLevels, Item, Itemset, SupportTable, Transaction,
};
