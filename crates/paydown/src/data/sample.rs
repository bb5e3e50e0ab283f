//! Sample data for first-run seeding

use jiff::civil::Date;

use paydown_core::date_math::next_due_date;

use super::ledger_data::{DebtData, LedgerData};

/// A small realistic ledger to explore the commands with
pub fn sample_ledger(today: Date) -> LedgerData {
    let debt = |name: &str, balance: f64, monthly_payment: f64, due_day: i8, apr: f64, autopay| {
        DebtData {
            name: name.to_string(),
            balance,
            monthly_payment,
            due_day,
            apr,
            active: true,
            paid_this_cycle: 0.0,
            next_due_date: next_due_date(due_day, today),
            autopay,
        }
    };

    LedgerData {
        debts: vec![
            debt("Credit Card A", 5000.0, 150.0, 15, 24.99, false),
            debt("Student Loan", 15_000.0, 300.0, 5, 6.5, true),
            debt("Car Loan", 12_000.0, 400.0, 22, 5.75, true),
            debt("Credit Card B", 2500.0, 75.0, 28, 18.99, false),
        ],
        payments: vec![],
    }
}
