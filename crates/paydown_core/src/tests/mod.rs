//! Integration tests for the paydown simulation engine
//!
//! Tests are organized by topic:
//! - `ordering` - Ordering policy goldens, ties, and the hybrid quick win
//! - `simulation` - Simulator loop mechanics, allocation, and edge cases
//! - `payments` - Payment logging and billing-cycle tracking
//! - `estimates` - Dashboard due totals
//! - `properties` - Property-based invariants

mod payments;

use crate::model::{Debt, DebtId, SimulatedDebt};

pub(crate) fn sim_debt(id: u16, balance: f64, monthly_payment: f64, apr: f64) -> SimulatedDebt {
    SimulatedDebt {
        debt_id: DebtId(id),
        balance,
        monthly_payment,
        apr,
    }
}

pub(crate) fn ledger_debt(id: u16, name: &str, balance: f64, monthly_payment: f64, apr: f64) -> Debt {
    Debt {
        debt_id: DebtId(id),
        name: name.to_string(),
        balance,
        monthly_payment,
        due_day: 15,
        apr,
        active: true,
        paid_this_cycle: 0.0,
        next_due_date: jiff::civil::date(2026, 3, 15),
        autopay: false,
    }
}
