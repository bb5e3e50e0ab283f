//! Payment logging and billing-cycle tracking.
//!
//! Mutations operate on an explicit [`Ledger`] value and report what they
//! changed; callers own persistence and presentation. The simulator never
//! goes through here — logged payments are real-world history, not
//! projections.

use jiff::civil::Date;

use crate::date_math::advance_due_date;
use crate::error::{LookupError, Result};
use crate::model::{DebtId, Ledger, Payment, PaymentId};

/// Outcome of logging a payment, for the caller to surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedPayment {
    pub payment_id: PaymentId,
    /// The payment brought the balance to zero and deactivated the debt
    pub debt_cleared: bool,
    /// The cleared debt still has autopay enabled
    pub autopay_warning: bool,
}

/// Record a payment against a debt and update its balance and cycle state.
///
/// When the payment counts toward the cycle and the accumulated amount
/// reaches the minimum, the due date advances one billing cycle and the
/// cycle accumulator resets. A balance reaching zero deactivates the debt.
pub fn log_payment(
    ledger: &mut Ledger,
    debt_id: DebtId,
    amount: f64,
    paid_on: Date,
    count_toward_cycle: bool,
) -> Result<LoggedPayment> {
    let payment_id = ledger.next_payment_id();

    let mut debt_cleared = false;
    let mut autopay_warning = false;
    {
        let debt = ledger
            .debt_mut(debt_id)
            .ok_or(LookupError::DebtNotFound(debt_id))?;

        debt.balance = (debt.balance - amount).max(0.0);

        if count_toward_cycle {
            debt.paid_this_cycle += amount;

            if debt.cycle_satisfied() && debt.active {
                debt.next_due_date = advance_due_date(debt.due_day, debt.next_due_date);
                debt.paid_this_cycle = 0.0;
            }
        }

        if debt.balance <= 0.0 {
            debt.balance = 0.0;
            debt.active = false;
            debt.paid_this_cycle = 0.0;
            debt_cleared = true;
            autopay_warning = debt.autopay;
        } else if count_toward_cycle
            && debt.monthly_payment > debt.balance
            && debt.paid_this_cycle > debt.balance
        {
            // Partial cycle on a nearly-cleared debt: what is left to pay
            // this cycle can never exceed what is left of the debt
            debt.paid_this_cycle = debt.balance;
        }
    }

    ledger.payments.push(Payment {
        payment_id,
        debt_id,
        amount,
        paid_on,
        count_toward_cycle,
    });

    Ok(LoggedPayment {
        payment_id,
        debt_cleared,
        autopay_warning,
    })
}
