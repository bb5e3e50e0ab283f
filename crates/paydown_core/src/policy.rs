//! Repayment ordering policies
//!
//! Each policy maps the active debts to a priority ordering of debt ids.
//! Minimum payments go to every debt each month regardless of order; the
//! ordering only governs where extra cash lands first and how the monthly
//! schedule groups its records.
//!
//! Policies are pure: same input, same output, no mutation of the slice
//! they are given.

use crate::model::{DebtId, SimulatedDebt, Strategy};

/// Smallest balance first. Ties keep their relative input order.
pub fn snowball_order(debts: &[SimulatedDebt]) -> Vec<DebtId> {
    let mut sorted: Vec<&SimulatedDebt> = debts.iter().collect();
    sorted.sort_by(|a, b| a.balance.total_cmp(&b.balance));
    sorted.iter().map(|d| d.debt_id).collect()
}

/// Highest APR first; ties broken by smaller balance.
pub fn avalanche_order(debts: &[SimulatedDebt]) -> Vec<DebtId> {
    let mut sorted: Vec<&SimulatedDebt> = debts.iter().collect();
    sorted.sort_by(|a, b| b.apr.total_cmp(&a.apr).then(a.balance.total_cmp(&b.balance)));
    sorted.iter().map(|d| d.debt_id).collect()
}

/// Avalanche with at most one quick win moved to the front.
///
/// The quick win is the first debt, in input order, clearable within two
/// months out of its minimum plus the extra budget, provided its balance
/// fits inside two months of the total funds available across all debts.
pub fn hybrid_order(debts: &[SimulatedDebt], extra_cash: f64) -> Vec<DebtId> {
    let total_monthly: f64 = debts.iter().map(|d| d.monthly_payment).sum();
    let available_per_month = extra_cash + total_monthly;

    let mut quick_win = None;
    for debt in debts {
        let funds_per_month = debt.monthly_payment + extra_cash;
        // A debt with no funds flowing toward it is never clearable
        if funds_per_month <= 0.0 {
            continue;
        }
        let months_to_clear = (debt.balance / funds_per_month).ceil();
        if months_to_clear <= 2.0 && debt.balance <= available_per_month * 2.0 {
            quick_win = Some(debt.debt_id);
            break;
        }
    }

    let remainder: Vec<SimulatedDebt> = debts
        .iter()
        .filter(|d| Some(d.debt_id) != quick_win)
        .copied()
        .collect();

    let mut order = avalanche_order(&remainder);
    if let Some(debt_id) = quick_win {
        order.insert(0, debt_id);
    }
    order
}

/// Ordering for the selected strategy
pub fn payoff_order(debts: &[SimulatedDebt], strategy: Strategy, extra_cash: f64) -> Vec<DebtId> {
    match strategy {
        Strategy::Snowball => snowball_order(debts),
        Strategy::Avalanche => avalanche_order(debts),
        Strategy::Hybrid => hybrid_order(debts, extra_cash),
    }
}
