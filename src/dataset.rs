//! Loading transactions from delimited text, one transaction per line.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::types::Transaction;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read transactions from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read transactions from `reader`. Items are split on `delimiter` and
/// trimmed; blank lines and empty items are skipped.
pub fn parse_transactions<R: BufRead>(
    reader: R,
    delimiter: char,
) -> io::Result<Vec<Transaction<String>>> {
    let mut transactions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        transactions.push(
            line.split(delimiter)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect(),
        );
    }
    Ok(transactions)
}

pub fn load_transactions(
    path: impl AsRef<Path>,
    delimiter: char,
) -> Result<Vec<Transaction<String>>, DatasetError> {
    let path = path.as_ref();
    let io_error = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let transactions =
        parse_transactions(BufReader::new(file), delimiter).map_err(io_error)?;
    tracing::debug!(
        path = %path.display(),
        transactions = transactions.len(),
        "loaded transactions"
    );

    Ok(transactions)
}
