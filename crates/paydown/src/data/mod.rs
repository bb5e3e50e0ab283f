pub mod convert;
pub mod ledger_data;
pub mod sample;
pub mod storage;

pub use convert::{ResolvedLedger, to_core, to_data};
pub use ledger_data::{ConfigData, DebtData, LedgerData, PaymentData};
pub use storage::{DataDirectory, StorageError};
