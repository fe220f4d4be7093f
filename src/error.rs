/// Broad class of a [`MiningError`], as surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InconsistentCandidate,
}

/// Errors raised while mining frequent itemsets. All of them abort the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("min_support must lie in [0, 1], got {min_support}")]
    MinSupportOutOfRange { min_support: f64 },

    #[error("candidate generation needs k >= 2, got k = {k}")]
    InvalidCardinality { k: usize },

    #[error("cannot compute support over an empty transaction collection")]
    EmptyTransactions,

    #[error("expected itemsets of cardinality {expected}, found one of cardinality {found}")]
    MixedCardinality { expected: usize, found: usize },
}

impl MiningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MiningError::MinSupportOutOfRange { .. }
            | MiningError::InvalidCardinality { .. }
            | MiningError::EmptyTransactions => ErrorKind::InvalidInput,
            MiningError::MixedCardinality { .. } => ErrorKind::InconsistentCandidate,
        }
    }
}

pub type Result<T> = std::result::Result<T, MiningError>;

/// Rejects thresholds outside the closed unit interval, NaN included.
pub(crate) fn check_min_support(min_support: f64) -> Result<()> {
    if (0.0..=1.0).contains(&min_support) {
        Ok(())
    } else {
        Err(MiningError::MinSupportOutOfRange { min_support })
    }
}
