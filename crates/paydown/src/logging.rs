use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;

/// Rotate the log by moving it aside once it exceeds the maximum size.
/// One previous generation is kept as `paydown.log.1`.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };
    if metadata.len() <= MAX_LOG_SIZE {
        return Ok(());
    }
    fs::rename(log_path, log_path.with_extension("log.1"))
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/paydown.log` with size-based rotation.
/// The log level can be controlled via the `level` parameter or the
/// `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("paydown.log");

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("paydown={level},paydown_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::debug!("paydown logging initialized (log_path={})", log_path.display());
    Ok(())
}
