mod transaction_queries;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use transaction_queries::TransactionQueries;

/// How records sharing a transaction number count towards amount queries.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Every record counts.
    #[default]
    KeepAll,
    /// Only the first record per transaction number counts.
    FirstByTransactionNumber
}

impl DuplicatePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "keep-all" => Some(DuplicatePolicy::KeepAll),
            "first-by-transaction-number" => Some(DuplicatePolicy::FirstByTransactionNumber),
            _ => None
        }
    }
}

impl Display for DuplicatePolicy {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::KeepAll => write!(formatter, "keep-all"),
            DuplicatePolicy::FirstByTransactionNumber => write!(formatter, "first-by-transaction-number")
        }
    }
}
