//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// True when a structured format (`--json`/`--yaml`) was requested.
    pub fn is_structured(&self) -> bool {
        self.format != OutputFormat::Text
    }

    /// Print a serializable value in the configured structured format.
    /// In text mode this prints nothing; callers use [`Output::info`] there.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => {}
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        }
        Ok(())
    }

    /// Print raw text to stdout (not serialized).
    pub fn print_raw(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a status message to stderr unless quiet or structured.
    pub fn info(&self, message: &str) {
        if !self.quiet && !self.is_structured() {
            eprintln!("{}", message);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("Warning: {}", message);
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
