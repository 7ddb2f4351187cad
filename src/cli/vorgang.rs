//! Vorgang CLI commands.

use crate::cli::args::AddVorgangSectionArgs;
use crate::cli::output::Output;
use crate::cli::{read_note, require_text, write_note};
use crate::date::DateLocale;
use crate::error::{ExitCode, Result};
use crate::vorgang;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct SectionResponse {
    path: PathBuf,
    heading: String,
    cursor_line: usize,
}

pub fn add_section(
    args: &AddVorgangSectionArgs,
    locale: DateLocale,
    date: NaiveDate,
    output: &Output,
) -> Result<ExitCode> {
    let name = require_text(&args.name)?;
    let content = read_note(&args.path)?;

    let update = vorgang::add_section(&content, name, locale, date);
    write_note(&args.path, &update.content)?;

    let heading = vorgang::heading_text(name, date, locale);
    output.print(&SectionResponse {
        path: args.path.clone(),
        heading: heading.clone(),
        cursor_line: update.cursor_line,
    })?;
    output.info(&format!(
        "Added section '{}' to {}",
        heading,
        args.path.display()
    ));
    Ok(ExitCode::Success)
}
