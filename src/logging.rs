//! File logging for the binaries.
//!
//! The dialogs own the terminal, so log lines go to a file rather than
//! stdout or stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Send `log` output at `level` and above to `path`.
///
/// `LevelFilter::Off` skips creating the file.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(level, config, file).context("installing logger")?;
    log::info!("logging to {} at {level}", path.display());
    Ok(())
}
