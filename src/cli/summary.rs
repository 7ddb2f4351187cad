//! Besprechung summary CLI command. Read-only: the note is never written.

use crate::cli::args::BesprechungSummaryArgs;
use crate::cli::output::Output;
use crate::cli::read_note;
use crate::config::Config;
use crate::error::{ExitCode, Result};
use crate::summary;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct SummaryResponse {
    path: PathBuf,
    headings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

pub fn besprechung_summary(
    args: &BesprechungSummaryArgs,
    config: &Config,
    output: &Output,
) -> Result<ExitCode> {
    let headings = if args.headings.is_empty() {
        config.summary_headings.clone()
    } else {
        args.headings.clone()
    };

    let content = read_note(&args.path)?;
    let result = summary::format_summary(&content, &headings);

    if output.is_structured() {
        output.print(&SummaryResponse {
            path: args.path.clone(),
            headings,
            summary: result,
        })?;
        return Ok(ExitCode::Success);
    }

    match result {
        Some(text) => output.print_raw(&text),
        None => output.info(&format!("No sections found in {}", args.path.display())),
    }
    Ok(ExitCode::Success)
}
