//! Strategy projection commands: plan and compare

use color_eyre::eyre::eyre;

use paydown_core::model::{SimulationResult, Strategy};
use paydown_core::simulation::{compare_strategies, simulate_strategy};

use crate::data::{DataDirectory, ResolvedLedger, to_core};
use crate::util::format::{format_currency, format_months};

pub fn plan(
    storage: &DataDirectory,
    strategy: Option<&str>,
    extra_cash: Option<f64>,
    schedule: bool,
) -> color_eyre::Result<()> {
    let loaded = storage.load()?;
    let resolved = to_core(&loaded.ledger);

    let strategy = match strategy {
        Some(s) => s.parse::<Strategy>().map_err(|e| eyre!(e))?,
        None => loaded.config.preferences.strategy,
    };
    let extra_cash = extra_cash.unwrap_or(loaded.config.preferences.extra_cash);

    let result = simulate_strategy(&resolved.ledger.debts, strategy, extra_cash);
    if result.payoff_order.is_empty() {
        println!("No active debts to plan for.");
        return Ok(());
    }

    tracing::debug!(%strategy, extra_cash, months = result.months_to_zero, "Plan simulated");

    println!(
        "Strategy: {strategy}   Extra cash: {}/mo",
        format_currency(extra_cash)
    );
    let order_names: Vec<&str> = result
        .payoff_order
        .iter()
        .map(|&id| resolved.name(id))
        .collect();
    println!("Payoff order: {}", order_names.join(", "));
    println!();
    print_summary(&result);

    if schedule {
        println!();
        print_schedule(&result, &resolved);
    }

    Ok(())
}

fn print_summary(result: &SimulationResult) {
    if result.capped() {
        println!(
            "Not projected to pay off within {} months; minimum payments",
            result.months_to_zero
        );
        println!("never outrun the accruing interest on at least one debt.");
    } else {
        println!(
            "Debt free in:      {} months ({})",
            result.months_to_zero,
            format_months(result.months_to_zero)
        );
        println!("First debt clears: month {}", result.first_payoff_in_months);
    }
    println!(
        "Total interest:    {}",
        format_currency(result.total_interest)
    );
}

fn print_schedule(result: &SimulationResult, resolved: &ResolvedLedger) {
    println!("Month-by-month schedule:");
    for entry in &result.monthly_schedule {
        let line: Vec<String> = entry
            .payments
            .iter()
            .map(|p| format!("{} {}", resolved.name(p.debt_id), format_currency(p.amount)))
            .collect();
        println!(
            "  {:>4}  {}  (total {})",
            entry.month_index + 1,
            line.join(", "),
            format_currency(entry.total())
        );
    }
}

pub fn compare(storage: &DataDirectory, extra_cash: Option<f64>) -> color_eyre::Result<()> {
    let loaded = storage.load()?;
    let resolved = to_core(&loaded.ledger);
    let extra_cash = extra_cash.unwrap_or(loaded.config.preferences.extra_cash);

    let comparison = compare_strategies(&resolved.ledger.debts, extra_cash);
    let best = comparison.best_by_interest().map(|(s, _)| s);

    println!(
        "Comparing strategies with {}/mo extra cash:\n",
        format_currency(extra_cash)
    );
    println!(
        "{:<10} {:>7} {:>13} {:>15}",
        "STRATEGY", "MONTHS", "FIRST PAYOFF", "TOTAL INTEREST"
    );
    for strategy in Strategy::ALL {
        let Some(result) = comparison.result(strategy) else {
            continue;
        };
        let marker = if best == Some(strategy) { " *" } else { "" };
        println!(
            "{:<10} {:>7} {:>13} {:>15}{}",
            strategy.name(),
            result.months_to_zero,
            result.first_payoff_in_months,
            format_currency(result.total_interest),
            marker,
        );
    }
    if best.is_some() {
        println!("\n* least total interest");
    }

    Ok(())
}
