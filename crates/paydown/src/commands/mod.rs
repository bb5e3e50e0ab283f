//! CLI subcommands
//!
//! Each command loads what it needs from the data directory, calls into
//! `paydown_core`, renders to stdout, and saves anything it changed.

mod ledger;
mod plan;

use std::path::Path;

use clap::Subcommand;

use crate::data::DataDirectory;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all tracked debts
    List,
    /// Show due totals for this week, next week, and this month
    Due,
    /// Project the payoff plan under the configured strategy
    Plan {
        /// Strategy override (snowball, avalanche, hybrid)
        #[arg(short, long)]
        strategy: Option<String>,
        /// Extra monthly cash override
        #[arg(short, long)]
        extra_cash: Option<f64>,
        /// Print the month-by-month payment schedule
        #[arg(long)]
        schedule: bool,
    },
    /// Compare all three strategies side by side
    Compare {
        /// Extra monthly cash override
        #[arg(short, long)]
        extra_cash: Option<f64>,
    },
    /// Log a payment against a debt
    Log {
        /// Debt name
        name: String,
        /// Payment amount
        amount: f64,
        /// Payment date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Do not count this payment toward the current billing cycle
        #[arg(long)]
        no_cycle: bool,
    },
    /// Seed the data directory with sample debts
    Seed,
}

pub fn run(command: Command, data_dir: &Path) -> color_eyre::Result<()> {
    let storage = DataDirectory::new(data_dir.to_path_buf());

    match command {
        Command::List => ledger::list(&storage),
        Command::Due => ledger::due(&storage),
        Command::Plan {
            strategy,
            extra_cash,
            schedule,
        } => plan::plan(&storage, strategy.as_deref(), extra_cash, schedule),
        Command::Compare { extra_cash } => plan::compare(&storage, extra_cash),
        Command::Log {
            name,
            amount,
            date,
            no_cycle,
        } => ledger::log(&storage, &name, amount, date.as_deref(), !no_cycle),
        Command::Seed => ledger::seed(&storage),
    }
}

/// Today's date in the system time zone
pub(crate) fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
