//! Debt accounts and payment records
//!
//! The [`Ledger`] is the complete mutable state of the tracker: the debts
//! and their payment history. It is passed explicitly into and out of the
//! mutation functions in [`crate::payments`] — there is no ambient store.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::{DebtId, PaymentId};

/// A tracked debt account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub debt_id: DebtId,
    pub name: String,
    /// Outstanding balance, never negative
    pub balance: f64,
    /// Contractual minimum payment per billing cycle
    pub monthly_payment: f64,
    /// Day of month the payment is due (1-31, clamped to the month length)
    pub due_day: i8,
    /// Annual percentage rate, e.g. 24.99
    pub apr: f64,
    pub active: bool,
    /// Amount paid toward the current billing cycle so far
    pub paid_this_cycle: f64,
    pub next_due_date: Date,
    pub autopay: bool,
}

impl Debt {
    /// Whether the current cycle's minimum has been met
    pub fn cycle_satisfied(&self) -> bool {
        self.paid_this_cycle >= self.monthly_payment
    }
}

/// A logged payment against a debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub debt_id: DebtId,
    pub amount: f64,
    pub paid_on: Date,
    /// Whether this payment counts toward the current billing cycle
    pub count_toward_cycle: bool,
}

/// The complete tracker state: debts plus their payment history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub debts: Vec<Debt>,
    pub payments: Vec<Payment>,
}

impl Ledger {
    pub fn debt(&self, debt_id: DebtId) -> Option<&Debt> {
        self.debts.iter().find(|d| d.debt_id == debt_id)
    }

    pub fn debt_mut(&mut self, debt_id: DebtId) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|d| d.debt_id == debt_id)
    }

    /// Next free payment id, one past the largest in the history
    pub fn next_payment_id(&self) -> PaymentId {
        let max = self.payments.iter().map(|p| p.payment_id.0).max();
        PaymentId(max.map_or(0, |m| m + 1))
    }
}

/// Working copy of a debt used inside one simulation run.
///
/// Owned exclusively by that run and discarded with it; the ledger's
/// [`Debt`] records are never mutated by the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedDebt {
    pub debt_id: DebtId,
    pub balance: f64,
    pub monthly_payment: f64,
    pub apr: f64,
}

impl SimulatedDebt {
    /// Snapshot a ledger debt, clamping negative amounts to zero so
    /// malformed input never reaches the interest or payment math.
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            debt_id: debt.debt_id,
            balance: debt.balance.max(0.0),
            monthly_payment: debt.monthly_payment.max(0.0),
            apr: debt.apr.max(0.0),
        }
    }
}
