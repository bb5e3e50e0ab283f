use clap::Parser;
use paydown::{commands, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paydown")]
#[command(about = "A command-line debt payoff tracker and strategy simulator")]
struct Args {
    /// Path to the data directory (default: ~/.paydown/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: commands::Command,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".paydown")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    commands::run(args.command, &data_dir)
}
