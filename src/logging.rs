//! File logging for the terminal binary.
//!
//! The game owns the alternate screen, so log records go to a file instead
//! of stderr.

use std::path::Path;

use anyhow::Result;
use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

/// Start logging into `dir`, or do nothing when `dir` is `None`.
///
/// The level comes from `RUST_LOG` (fallback `info`). Keep the returned
/// handle alive for as long as records should be written.
pub fn setup_logging(dir: Option<&Path>) -> Result<Option<LoggerHandle>> {
    let Some(dir) = dir else {
        return Ok(None);
    };

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(dir).basename("brainmatch"))
        .format(opt_format)
        .rotate(
            Criterion::Size(1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(Some(handle))
}
