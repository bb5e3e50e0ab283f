//! Ledger commands: list, due, log, seed

use color_eyre::eyre::eyre;

use paydown_core::estimates::{due_totals, estimated_year_total};
use paydown_core::payments::log_payment;

use crate::data::{DataDirectory, sample, to_core, to_data};
use crate::util::format::{format_apr, format_currency};

use super::today;

pub fn list(storage: &DataDirectory) -> color_eyre::Result<()> {
    let ledger = storage.load_ledger()?;

    if ledger.debts.is_empty() {
        println!("No debts tracked yet. Run `paydown seed` for sample data.");
        return Ok(());
    }

    println!(
        "{:<20} {:>12} {:>10} {:>8} {:>12}  {}",
        "NAME", "BALANCE", "MIN/MO", "APR", "NEXT DUE", "FLAGS"
    );
    for debt in &ledger.debts {
        let mut flags = Vec::new();
        if !debt.active {
            flags.push("inactive");
        }
        if debt.autopay {
            flags.push("autopay");
        }
        if debt.paid_this_cycle >= debt.monthly_payment && debt.active {
            flags.push("cycle paid");
        }
        println!(
            "{:<20} {:>12} {:>10} {:>8} {:>12}  {}",
            debt.name,
            format_currency(debt.balance),
            format_currency(debt.monthly_payment),
            format_apr(debt.apr),
            debt.next_due_date.to_string(),
            flags.join(", "),
        );
    }

    Ok(())
}

pub fn due(storage: &DataDirectory) -> color_eyre::Result<()> {
    let loaded = storage.load()?;
    let resolved = to_core(&loaded.ledger);
    let debts = &resolved.ledger.debts;

    let totals = due_totals(debts, today(), &loaded.config.preferences);
    let year = estimated_year_total(debts);

    println!("Due this week:  {:>12}", format_currency(totals.this_week));
    println!("Due next week:  {:>12}", format_currency(totals.next_week));
    println!("Due this month: {:>12}", format_currency(totals.this_month));
    println!("Total debt:     {:>12}", format_currency(totals.total_debt));
    println!("Minimums/year:  {:>12}", format_currency(year));

    Ok(())
}

pub fn log(
    storage: &DataDirectory,
    name: &str,
    amount: f64,
    date: Option<&str>,
    count_toward_cycle: bool,
) -> color_eyre::Result<()> {
    let paid_on = match date {
        Some(s) => s.parse()?,
        None => today(),
    };

    let ledger_data = storage.load_ledger()?;
    let mut resolved = to_core(&ledger_data);

    let debt_id = resolved
        .debt_id_by_name(name)
        .ok_or_else(|| eyre!("no debt named '{name}' (see `paydown list`)"))?;

    let logged = log_payment(&mut resolved.ledger, debt_id, amount, paid_on, count_toward_cycle)?;
    let (debt_name, balance, next_due) = {
        let debt = resolved
            .ledger
            .debt(debt_id)
            .ok_or(paydown_core::error::LookupError::DebtNotFound(debt_id))?;
        (debt.name.clone(), debt.balance, debt.next_due_date)
    };
    storage.save_ledger(&to_data(&resolved))?;

    tracing::info!(debt = %debt_name, amount, %paid_on, "Payment logged");

    println!(
        "Logged {} against {} on {}.",
        format_currency(amount),
        debt_name,
        paid_on
    );
    if logged.debt_cleared {
        println!("{debt_name} is fully paid off and has been marked inactive.");
        if logged.autopay_warning {
            println!("Note: autopay is still enabled for this debt.");
        }
    } else {
        println!(
            "Remaining balance {}, next due {}.",
            format_currency(balance),
            next_due
        );
    }

    Ok(())
}

pub fn seed(storage: &DataDirectory) -> color_eyre::Result<()> {
    if storage.has_ledger() {
        println!("A ledger already exists in {}; not overwriting.", storage.root().display());
        return Ok(());
    }

    let ledger = sample::sample_ledger(today());
    storage.save_ledger(&ledger)?;
    storage.save_config(&Default::default())?;

    println!(
        "Seeded {} sample debts into {}.",
        ledger.debts.len(),
        storage.root().display()
    );
    Ok(())
}
