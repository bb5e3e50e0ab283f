//! Tests for payment logging and billing-cycle tracking

use jiff::civil::date;

use super::ledger_debt;
use crate::error::LookupError;
use crate::model::{DebtId, Ledger, PaymentId};
use crate::payments::log_payment;

fn ledger_with(debts: Vec<crate::model::Debt>) -> Ledger {
    Ledger {
        debts,
        payments: vec![],
    }
}

#[test]
fn test_log_payment_records_and_reduces_balance() {
    let mut ledger = ledger_with(vec![ledger_debt(1, "Card", 500.0, 100.0, 19.99)]);

    let logged = log_payment(&mut ledger, DebtId(1), 120.0, date(2026, 3, 10), true).unwrap();

    assert_eq!(logged.payment_id, PaymentId(0));
    assert!(!logged.debt_cleared);
    assert_eq!(ledger.debts[0].balance, 380.0);
    assert_eq!(ledger.payments.len(), 1);
    assert_eq!(ledger.payments[0].debt_id, DebtId(1));
    assert_eq!(ledger.payments[0].amount, 120.0);
    assert_eq!(ledger.payments[0].paid_on, date(2026, 3, 10));
}

#[test]
fn test_payment_ids_are_sequential() {
    let mut ledger = ledger_with(vec![ledger_debt(1, "Card", 500.0, 100.0, 0.0)]);

    let first = log_payment(&mut ledger, DebtId(1), 10.0, date(2026, 3, 1), true).unwrap();
    let second = log_payment(&mut ledger, DebtId(1), 10.0, date(2026, 3, 2), true).unwrap();

    assert_eq!(first.payment_id, PaymentId(0));
    assert_eq!(second.payment_id, PaymentId(1));
}

#[test]
fn test_satisfying_the_cycle_advances_due_date() {
    let mut debt = ledger_debt(1, "Card", 500.0, 100.0, 0.0);
    debt.due_day = 15;
    debt.next_due_date = date(2026, 3, 15);
    let mut ledger = ledger_with(vec![debt]);

    log_payment(&mut ledger, DebtId(1), 100.0, date(2026, 3, 10), true).unwrap();

    let debt = &ledger.debts[0];
    assert_eq!(debt.next_due_date, date(2026, 4, 15));
    assert_eq!(debt.paid_this_cycle, 0.0);
}

#[test]
fn test_partial_payment_accumulates_without_advancing() {
    let mut ledger = ledger_with(vec![ledger_debt(1, "Card", 500.0, 100.0, 0.0)]);

    log_payment(&mut ledger, DebtId(1), 40.0, date(2026, 3, 10), true).unwrap();

    let debt = &ledger.debts[0];
    assert_eq!(debt.paid_this_cycle, 40.0);
    assert_eq!(debt.next_due_date, date(2026, 3, 15));

    // The second partial tips the cycle over
    log_payment(&mut ledger, DebtId(1), 60.0, date(2026, 3, 12), true).unwrap();
    let debt = &ledger.debts[0];
    assert_eq!(debt.next_due_date, date(2026, 4, 15));
    assert_eq!(debt.paid_this_cycle, 0.0);
}

#[test]
fn test_non_cycle_payment_leaves_cycle_alone() {
    let mut ledger = ledger_with(vec![ledger_debt(1, "Card", 500.0, 100.0, 0.0)]);

    log_payment(&mut ledger, DebtId(1), 200.0, date(2026, 3, 10), false).unwrap();

    let debt = &ledger.debts[0];
    assert_eq!(debt.balance, 300.0);
    assert_eq!(debt.paid_this_cycle, 0.0);
    assert_eq!(debt.next_due_date, date(2026, 3, 15));
}

#[test]
fn test_clearing_payment_deactivates() {
    let mut debt = ledger_debt(1, "Card", 150.0, 100.0, 0.0);
    debt.autopay = true;
    let mut ledger = ledger_with(vec![debt]);

    let logged = log_payment(&mut ledger, DebtId(1), 200.0, date(2026, 3, 10), true).unwrap();

    assert!(logged.debt_cleared);
    assert!(logged.autopay_warning);
    let debt = &ledger.debts[0];
    assert_eq!(debt.balance, 0.0);
    assert!(!debt.active);
    assert_eq!(debt.paid_this_cycle, 0.0);
}

#[test]
fn test_overpayment_never_goes_negative() {
    let mut ledger = ledger_with(vec![ledger_debt(1, "Card", 80.0, 100.0, 0.0)]);

    let logged = log_payment(&mut ledger, DebtId(1), 500.0, date(2026, 3, 10), false).unwrap();

    assert!(logged.debt_cleared);
    assert!(!logged.autopay_warning);
    assert_eq!(ledger.debts[0].balance, 0.0);
}

#[test]
fn test_cycle_accumulator_clamped_to_remaining_balance() {
    // Minimum exceeds what is left: the outstanding cycle amount cannot
    // be more than the remaining balance
    let mut debt = ledger_debt(1, "Card", 100.0, 80.0, 0.0);
    debt.paid_this_cycle = 30.0;
    let mut ledger = ledger_with(vec![debt]);

    log_payment(&mut ledger, DebtId(1), 30.0, date(2026, 3, 10), true).unwrap();

    let debt = &ledger.debts[0];
    assert_eq!(debt.balance, 70.0);
    // 30 + 30 = 60 paid, not yet satisfied (80), not above balance (70)
    assert_eq!(debt.paid_this_cycle, 60.0);

    log_payment(&mut ledger, DebtId(1), 5.0, date(2026, 3, 11), true).unwrap();
    let debt = &ledger.debts[0];
    assert_eq!(debt.balance, 65.0);
    // 65 accumulated equals the clamp boundary exactly
    assert_eq!(debt.paid_this_cycle, 65.0);

    log_payment(&mut ledger, DebtId(1), 2.0, date(2026, 3, 12), true).unwrap();
    let debt = &ledger.debts[0];
    assert_eq!(debt.balance, 63.0);
    // 67 accumulated exceeds the 63 remaining, clamped down
    assert_eq!(debt.paid_this_cycle, 63.0);
}

#[test]
fn test_unknown_debt_is_an_error() {
    let mut ledger = ledger_with(vec![ledger_debt(1, "Card", 500.0, 100.0, 0.0)]);

    let err = log_payment(&mut ledger, DebtId(42), 10.0, date(2026, 3, 10), true).unwrap_err();

    assert_eq!(err, LookupError::DebtNotFound(DebtId(42)));
    assert!(ledger.payments.is_empty());
    assert_eq!(ledger.debts[0].balance, 500.0);
}

#[test]
fn test_inactive_debt_cycle_does_not_advance() {
    let mut debt = ledger_debt(1, "Closed card", 500.0, 100.0, 0.0);
    debt.active = false;
    let mut ledger = ledger_with(vec![debt]);

    log_payment(&mut ledger, DebtId(1), 100.0, date(2026, 3, 10), true).unwrap();

    let debt = &ledger.debts[0];
    assert_eq!(debt.balance, 400.0);
    // Cycle satisfied but the debt is inactive, so the date stays put
    assert_eq!(debt.next_due_date, date(2026, 3, 15));
    assert_eq!(debt.paid_this_cycle, 100.0);
}
