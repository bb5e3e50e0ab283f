//! User preferences for strategy selection and dashboard bucketing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// First day of the week, used when bucketing due dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Mon,
    Sun,
}

/// Repayment ordering strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest balance first
    Snowball,
    /// Highest APR first
    Avalanche,
    /// Avalanche with one quick win moved to the front
    #[default]
    Hybrid,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Snowball, Strategy::Avalanche, Strategy::Hybrid];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            "hybrid" => Ok(Strategy::Hybrid),
            other => Err(format!(
                "unknown strategy '{other}' (expected snowball, avalanche, or hybrid)"
            )),
        }
    }
}

/// Preferences supplied by the caller alongside the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub week_start: WeekStart,
    /// ISO currency code, display only
    pub currency: String,
    pub strategy: Strategy,
    /// Discretionary monthly amount beyond minimum payments
    pub extra_cash: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Mon,
            currency: "USD".to_string(),
            strategy: Strategy::Hybrid,
            extra_cash: 0.0,
        }
    }
}
