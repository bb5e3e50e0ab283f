//! Summary totals over the ledger for dashboard display

use jiff::civil::Date;

use crate::date_math::{days_until_due, is_in_range, month_bounds, next_week_bounds, week_bounds};
use crate::model::{Debt, Preferences};

/// Due-amount buckets for the dashboard summary
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DueTotals {
    pub this_week: f64,
    pub next_week: f64,
    pub this_month: f64,
    pub total_debt: f64,
}

/// Twelve months of minimum payments across active debts
pub fn estimated_year_total(debts: &[Debt]) -> f64 {
    debts
        .iter()
        .filter(|d| d.active)
        .map(|d| d.monthly_payment * 12.0)
        .sum()
}

/// Bucket each active debt's minimum payment by where its next due date
/// falls relative to `today`. A debt whose cycle is already satisfied
/// drops out of the buckets until its due date comes around again; its
/// balance still counts toward the total.
pub fn due_totals(debts: &[Debt], today: Date, preferences: &Preferences) -> DueTotals {
    let (this_week_start, this_week_end) = week_bounds(today, preferences.week_start);
    let (next_week_start, next_week_end) = next_week_bounds(today, preferences.week_start);
    let (month_start, month_end) = month_bounds(today);

    let mut totals = DueTotals::default();

    for debt in debts.iter().filter(|d| d.active) {
        totals.total_debt += debt.balance;

        let due = debt.next_due_date;
        if debt.cycle_satisfied() && days_until_due(due, today) > 0 {
            continue;
        }

        if is_in_range(due, this_week_start, this_week_end) {
            totals.this_week += debt.monthly_payment;
        }
        if is_in_range(due, next_week_start, next_week_end) {
            totals.next_week += debt.monthly_payment;
        }
        if is_in_range(due, month_start, month_end) {
            totals.this_month += debt.monthly_payment;
        }
    }

    totals
}
