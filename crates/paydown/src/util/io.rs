//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a temporary file next to the target,
/// then renamed into place (atomic on POSIX systems), so an interrupted
/// write never leaves a half-written data file behind.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
