use std::fmt;

use crate::model::DebtId;

/// Errors related to ledger lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    DebtNotFound(DebtId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::DebtNotFound(id) => write!(f, "debt {id:?} not found"),
        }
    }
}

impl std::error::Error for LookupError {}

pub type Result<T> = std::result::Result<T, LookupError>;
