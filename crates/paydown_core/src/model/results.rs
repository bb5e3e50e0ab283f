//! Simulation results and payment schedules
//!
//! Contains the output types from running payoff simulations. The schedule
//! is an ordered sequence of per-month payment records that callers can
//! render in detail or ignore in favor of the summary totals.

use serde::{Deserialize, Serialize};

use super::ids::DebtId;

/// A single recorded payment within a simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub debt_id: DebtId,
    pub amount: f64,
}

/// All payments made in one simulated month.
///
/// Only non-zero amounts are recorded; a debt's minimum and extra payments
/// within the same month are summed into one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyScheduleEntry {
    /// 0-based month offset from the start of the run
    pub month_index: u32,
    pub payments: Vec<PaymentRecord>,
}

impl MonthlyScheduleEntry {
    /// Amount paid toward one debt this month, zero if none recorded
    pub fn payment_to(&self, debt_id: DebtId) -> f64 {
        self.payments
            .iter()
            .filter(|p| p.debt_id == debt_id)
            .map(|p| p.amount)
            .sum()
    }

    /// Total paid across all debts this month
    pub fn total(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }
}

/// Complete results from a single payoff simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Months simulated until every balance reached zero, or the safety cap
    pub months_to_zero: u32,
    /// Interest accrued across all debts and all months
    pub total_interest: f64,
    /// The priority ordering the run used
    pub payoff_order: Vec<DebtId>,
    /// 1-based month in which the first debt cleared; equals
    /// `months_to_zero` when no debt cleared before the end
    pub first_payoff_in_months: u32,
    /// One entry per month in which at least one payment occurred
    pub monthly_schedule: Vec<MonthlyScheduleEntry>,
}

impl SimulationResult {
    /// Sum of recorded payments toward one debt across the whole run
    pub fn total_paid_to(&self, debt_id: DebtId) -> f64 {
        self.monthly_schedule
            .iter()
            .map(|m| m.payment_to(debt_id))
            .sum()
    }

    /// Sum of all recorded payments across the whole run
    pub fn total_paid(&self) -> f64 {
        self.monthly_schedule.iter().map(|m| m.total()).sum()
    }

    /// Whether the run stopped at the non-convergence safety cap rather
    /// than reaching zero balances
    pub fn capped(&self) -> bool {
        self.months_to_zero >= crate::simulation::MONTH_CAP
    }
}
