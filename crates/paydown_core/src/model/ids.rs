//! Unique identifiers for ledger entities
//!
//! Each entity type has its own ID type to provide type safety and prevent
//! mixing up different kinds of identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Debt within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DebtId(pub u16);

/// Unique identifier for a logged Payment within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub u32);
