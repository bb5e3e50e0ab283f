//! Human-readable YAML shapes for the data directory
//!
//! Files on disk refer to debts by name; ids are assigned when the data
//! is converted to the core model. Defaults keep hand-edited files terse.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use paydown_core::model::Preferences;

fn default_true() -> bool {
    true
}

/// One tracked debt as stored in ledger.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtData {
    pub name: String,
    pub balance: f64,
    pub monthly_payment: f64,
    pub due_day: i8,
    pub apr: f64,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub paid_this_cycle: f64,
    pub next_due_date: Date,
    #[serde(default)]
    pub autopay: bool,
}

/// One logged payment as stored in ledger.yaml, keyed by debt name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentData {
    pub debt: String,
    pub amount: f64,
    pub paid_on: Date,
    #[serde(default = "default_true")]
    pub count_toward_cycle: bool,
}

/// Contents of ledger.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub debts: Vec<DebtData>,
    #[serde(default)]
    pub payments: Vec<PaymentData>,
}

impl LedgerData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}

/// Contents of config.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default)]
    pub preferences: Preferences,
}

impl ConfigData {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}
