//! Month-by-month payoff simulation engine
//!
//! [`simulate`] is the raw engine over debt snapshots; [`simulate_strategy`]
//! is the usual entry point from a ledger, and [`compare_strategies`] fans
//! the three strategy previews out (in parallel with the `parallel`
//! feature) since each run owns its own cloned snapshot.

use rustc_hash::FxHashMap;

use crate::model::{
    Debt, DebtId, MonthlyScheduleEntry, PaymentRecord, SimulatedDebt, SimulationResult, Strategy,
};
use crate::policy::payoff_order;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Hard cap on simulated months. Bounds inputs that never converge, e.g.
/// an APR so high that minimum payments never outrun monthly interest; a
/// result at the cap signals practical non-payoff, not a literal duration.
pub const MONTH_CAP: u32 = 1000;

/// One month of interest on a balance
fn apply_interest(balance: f64, apr: f64) -> f64 {
    if apr == 0.0 {
        return balance;
    }
    let monthly_rate = apr / 100.0 / 12.0;
    balance * (1.0 + monthly_rate)
}

/// Run the payoff simulation over a set of debt snapshots.
///
/// Each month: accrue interest on every debt, pay minimums in
/// `payoff_order`, then spread `extra_cash` down the same order. The run
/// stops when every balance reaches zero or [`MONTH_CAP`] is hit. Order
/// entries with no matching debt are skipped.
pub fn simulate(
    debts: &[SimulatedDebt],
    payoff_order: Vec<DebtId>,
    extra_cash: f64,
) -> SimulationResult {
    let mut debt_map: FxHashMap<DebtId, SimulatedDebt> =
        debts.iter().map(|d| (d.debt_id, *d)).collect();

    let mut total_interest = 0.0;
    let mut months_to_zero = 0u32;
    let mut monthly_schedule = Vec::new();
    let mut first_payoff_in_months: Option<u32> = None;

    let mut all_zeroed = debt_map.values().all(|d| d.balance <= 0.0);

    while !all_zeroed && months_to_zero < MONTH_CAP {
        // Interest accrues before any payment lands this month
        for debt in debt_map.values_mut() {
            let accrued = apply_interest(debt.balance, debt.apr);
            total_interest += accrued - debt.balance;
            debt.balance = accrued;
        }

        let mut month_payments: Vec<PaymentRecord> = Vec::new();
        // Shared across the order traversal, not reset per debt
        let mut remaining_extra = extra_cash;

        for &debt_id in &payoff_order {
            let Some(debt) = debt_map.get_mut(&debt_id) else {
                continue;
            };
            if debt.balance <= 0.0 {
                continue;
            }

            let payment = debt.monthly_payment.min(debt.balance);
            debt.balance -= payment;
            if payment > 0.0 {
                month_payments.push(PaymentRecord {
                    debt_id,
                    amount: payment,
                });
            }

            if remaining_extra > 0.0 && debt.balance > 0.0 {
                let extra = remaining_extra.min(debt.balance);
                debt.balance -= extra;
                remaining_extra -= extra;

                match month_payments.iter_mut().find(|p| p.debt_id == debt_id) {
                    Some(existing) => existing.amount += extra,
                    None => month_payments.push(PaymentRecord {
                        debt_id,
                        amount: extra,
                    }),
                }
            }

            if debt.balance <= 0.0 && first_payoff_in_months.is_none() {
                first_payoff_in_months = Some(months_to_zero + 1);
            }
        }

        if !month_payments.is_empty() {
            monthly_schedule.push(MonthlyScheduleEntry {
                month_index: months_to_zero,
                payments: month_payments,
            });
        }

        months_to_zero += 1;
        all_zeroed = debt_map.values().all(|d| d.balance <= 0.0);
    }

    SimulationResult {
        months_to_zero,
        total_interest,
        payoff_order,
        first_payoff_in_months: first_payoff_in_months.unwrap_or(months_to_zero),
        monthly_schedule,
    }
}

/// Snapshot the simulatable debts out of a ledger: active, carrying a
/// balance, with negative amounts clamped to zero at this boundary.
fn active_snapshots(debts: &[Debt]) -> Vec<SimulatedDebt> {
    debts
        .iter()
        .filter(|d| d.active && d.balance > 0.0)
        .map(SimulatedDebt::from_debt)
        .collect()
}

/// Simulate a ledger's payoff under one strategy
pub fn simulate_strategy(debts: &[Debt], strategy: Strategy, extra_cash: f64) -> SimulationResult {
    let extra_cash = extra_cash.max(0.0);
    let snapshots = active_snapshots(debts);
    let order = payoff_order(&snapshots, strategy, extra_cash);
    simulate(&snapshots, order, extra_cash)
}

/// Results of previewing every strategy against the same ledger
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    pub results: Vec<(Strategy, SimulationResult)>,
}

impl StrategyComparison {
    pub fn result(&self, strategy: Strategy) -> Option<&SimulationResult> {
        self.results
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, r)| r)
    }

    /// The strategy accruing the least total interest
    pub fn best_by_interest(&self) -> Option<(Strategy, &SimulationResult)> {
        self.results
            .iter()
            .min_by(|(_, a), (_, b)| a.total_interest.total_cmp(&b.total_interest))
            .map(|(s, r)| (*s, r))
    }
}

#[cfg(feature = "parallel")]
pub fn compare_strategies(debts: &[Debt], extra_cash: f64) -> StrategyComparison {
    let results = Strategy::ALL
        .into_par_iter()
        .map(|strategy| (strategy, simulate_strategy(debts, strategy, extra_cash)))
        .collect();
    StrategyComparison { results }
}

#[cfg(not(feature = "parallel"))]
pub fn compare_strategies(debts: &[Debt], extra_cash: f64) -> StrategyComparison {
    let results = Strategy::ALL
        .into_iter()
        .map(|strategy| (strategy, simulate_strategy(debts, strategy, extra_cash)))
        .collect();
    StrategyComparison { results }
}
