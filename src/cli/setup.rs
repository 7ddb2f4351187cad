//! Config bootstrap command.

use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{ExitCode, Result};
use std::path::PathBuf;

/// Write a default config file, leaving an existing one untouched.
pub fn init_config(path: Option<PathBuf>, output: &Output) -> Result<ExitCode> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if path.is_file() {
        output.info(&format!("Config already exists at {}", path.display()));
        return Ok(ExitCode::Success);
    }

    Config::default().save_to(&path)?;
    output.info(&format!("Wrote default config to {}", path.display()));
    Ok(ExitCode::Success)
}
