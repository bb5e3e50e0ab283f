//! Conversion between the name-keyed YAML shapes and the dense-id core model
//!
//! Ids are positional: the nth debt in the file becomes `DebtId(n)`. The
//! resolved ledger keeps the name table so commands can translate both ways.

use paydown_core::model::{Debt, DebtId, Ledger, Payment, PaymentId};

use super::ledger_data::{DebtData, LedgerData, PaymentData};

/// A core ledger plus the name table that produced it
#[derive(Debug, Clone, Default)]
pub struct ResolvedLedger {
    pub ledger: Ledger,
    /// Debt names, indexed by `DebtId`
    names: Vec<String>,
}

impl ResolvedLedger {
    /// Case-insensitive name lookup
    pub fn debt_id_by_name(&self, name: &str) -> Option<DebtId> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| DebtId(i as u16))
    }

    pub fn name(&self, debt_id: DebtId) -> &str {
        self.names
            .get(debt_id.0 as usize)
            .map_or("(unknown)", String::as_str)
    }
}

/// Resolve file data into the core model.
///
/// Payments naming a debt that no longer exists are dropped with a
/// warning rather than failing the whole load.
pub fn to_core(data: &LedgerData) -> ResolvedLedger {
    let names: Vec<String> = data.debts.iter().map(|d| d.name.clone()).collect();

    let debts = data
        .debts
        .iter()
        .enumerate()
        .map(|(i, d)| Debt {
            debt_id: DebtId(i as u16),
            name: d.name.clone(),
            balance: d.balance,
            monthly_payment: d.monthly_payment,
            due_day: d.due_day,
            apr: d.apr,
            active: d.active,
            paid_this_cycle: d.paid_this_cycle,
            next_due_date: d.next_due_date,
            autopay: d.autopay,
        })
        .collect();

    let mut payments = Vec::with_capacity(data.payments.len());
    for p in &data.payments {
        let Some(position) = names.iter().position(|n| n.eq_ignore_ascii_case(&p.debt)) else {
            tracing::warn!(debt = %p.debt, "Dropping payment for unknown debt");
            continue;
        };
        payments.push(Payment {
            payment_id: PaymentId(payments.len() as u32),
            debt_id: DebtId(position as u16),
            amount: p.amount,
            paid_on: p.paid_on,
            count_toward_cycle: p.count_toward_cycle,
        });
    }

    ResolvedLedger {
        ledger: Ledger { debts, payments },
        names,
    }
}

/// Project the core model back into its file shape
pub fn to_data(resolved: &ResolvedLedger) -> LedgerData {
    let debts = resolved
        .ledger
        .debts
        .iter()
        .map(|d| DebtData {
            name: d.name.clone(),
            balance: d.balance,
            monthly_payment: d.monthly_payment,
            due_day: d.due_day,
            apr: d.apr,
            active: d.active,
            paid_this_cycle: d.paid_this_cycle,
            next_due_date: d.next_due_date,
            autopay: d.autopay,
        })
        .collect();

    let payments = resolved
        .ledger
        .payments
        .iter()
        .map(|p| PaymentData {
            debt: resolved.name(p.debt_id).to_string(),
            amount: p.amount,
            paid_on: p.paid_on,
            count_toward_cycle: p.count_toward_cycle,
        })
        .collect();

    LedgerData { debts, payments }
}
