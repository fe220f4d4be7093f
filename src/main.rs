use std::{fmt::Display, path::PathBuf};

use anyhow::{Context, Result};
use apriori::{dataset::load_transactions, Apriori, CountingStrategy, Item, SupportTable};
use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "apriori-miner",
    version,
    about = "Mine frequent itemsets from a delimited transaction file"
)]
struct Args {
    /// Transaction file, one transaction per line
    data_path: PathBuf,
    /// Minimum support, a fraction in [0, 1]
    min_support: f64,
    /// Also print each frequent itemset with its rounded support (t/true/1 or f/false/0)
    #[arg(action = ArgAction::Set, value_parser = parse_flag, default_value = "false")]
    verbose: bool,
    /// Item separator within a line
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
    /// How candidate supports are counted
    #[arg(long, value_enum, default_value_t = Counting::Parallel)]
    counting: Counting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Counting {
    Sequential,
    Parallel,
    TidIndex,
}

impl From<Counting> for CountingStrategy {
    fn from(counting: Counting) -> Self {
        match counting {
            Counting::Sequential => CountingStrategy::Sequential,
            Counting::Parallel => CountingStrategy::Parallel,
            Counting::TidIndex => CountingStrategy::TidIndex,
        }
    }
}

fn parse_flag(input: &str) -> Result<bool, String> {
    match input.to_lowercase().as_str() {
        "t" | "1" | "true" => Ok(true),
        "f" | "0" | "false" => Ok(false),
        _ => Err(format!(
            "expected one of t, true, 1, f, false, 0 (any case), got {:?}",
            input
        )),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let transactions = load_transactions(&args.data_path, args.delimiter)?;
    let frequent = Apriori::new(args.min_support)?
        .with_counting(args.counting.into())
        .mine(&transactions)
        .with_context(|| format!("mining {}", args.data_path.display()))?;

    for (k, level) in frequent.levels().iter().enumerate() {
        println!("L{}: [{}]", k + 1, level.iter().join(", "));
    }
    println!("support: {{{}}}", support_entries(frequent.support_table()));

    if args.verbose {
        print!("{}", frequent);
    }

    Ok(())
}

/// Every counted itemset with its support, smallest itemsets first.
fn support_entries<I: Item + Display>(support: &SupportTable<I>) -> String {
    support
        .iter()
        .sorted_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)))
        .map(|(itemset, support)| format!("{}: {}", itemset, support))
        .join(", ")
}
