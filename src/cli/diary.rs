//! Diary CLI commands.

use crate::cli::args::{
    AddDiaryEntryArgs, AddReminderArgs, AddTextToDiaryArgs, EnsureTodayHeaderArgs,
};
use crate::cli::output::Output;
use crate::cli::{read_note, require_text, write_note};
use crate::config::Config;
use crate::date::DateLocale;
use crate::diary;
use crate::error::{ExitCode, LukitError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct HeaderResponse {
    path: PathBuf,
    header_line: usize,
    used_fallback: bool,
}

#[derive(Debug, Serialize)]
struct EntryResponse {
    path: PathBuf,
    entry_line: usize,
}

#[derive(Debug, Serialize)]
struct ReminderResponse {
    path: PathBuf,
    entry: String,
}

fn resolve_diary_path(arg: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    arg.or_else(|| config.diary_note_path.clone()).ok_or_else(|| {
        LukitError::ConfigError(
            "no diary note path given and none configured (set diary_note_path)".to_string(),
        )
    })
}

fn warn_on_fallback(output: &Output, used_fallback: bool) {
    if used_fallback {
        output.warn(
            "Diary note is missing the third separator (---). Header was appended at end.",
        );
    }
}

pub fn ensure_today_header(
    args: &EnsureTodayHeaderArgs,
    config: &Config,
    locale: DateLocale,
    date: NaiveDate,
    output: &Output,
) -> Result<ExitCode> {
    let path = resolve_diary_path(args.diary_path.clone(), config)?;
    let content = read_note(&path)?;

    let update = diary::ensure_today_header(&content, locale, date);
    write_note(&path, &update.content)?;

    warn_on_fallback(output, update.used_fallback);
    output.print(&HeaderResponse {
        path: path.clone(),
        header_line: update.header_line,
        used_fallback: update.used_fallback,
    })?;
    output.info(&format!("Ensured today's header in {}", path.display()));
    Ok(ExitCode::Success)
}

fn add_entry(
    path: &Path,
    entry: &str,
    locale: DateLocale,
    date: NaiveDate,
    output: &Output,
) -> Result<usize> {
    let content = read_note(path)?;
    let ensured = diary::ensure_today_header(&content, locale, date);
    warn_on_fallback(output, ensured.used_fallback);

    let update = diary::add_entry_under_today(&content, entry, locale, date);
    write_note(path, &update.content)?;
    Ok(update.entry_line)
}

pub fn add_text_to_diary(
    args: &AddTextToDiaryArgs,
    locale: DateLocale,
    date: NaiveDate,
    output: &Output,
) -> Result<ExitCode> {
    let text = require_text(&args.text)?;
    let entry = diary::format_text_entry(text);

    let entry_line = add_entry(&args.diary_path, &entry, locale, date, output)?;
    output.print(&EntryResponse {
        path: args.diary_path.clone(),
        entry_line,
    })?;
    output.info(&format!("Added entry to {}", args.diary_path.display()));
    Ok(ExitCode::Success)
}

pub fn add_diary_entry(
    args: &AddDiaryEntryArgs,
    locale: DateLocale,
    date: NaiveDate,
    output: &Output,
) -> Result<ExitCode> {
    let note_name = require_text(&args.note_name)?;
    let entry = diary::format_link_entry(note_name, args.heading.as_deref());

    let entry_line = add_entry(&args.diary_path, &entry, locale, date, output)?;
    output.print(&EntryResponse {
        path: args.diary_path.clone(),
        entry_line,
    })?;
    output.info(&format!("Added diary entry to {}", args.diary_path.display()));
    Ok(ExitCode::Success)
}

pub fn add_reminder(
    args: &AddReminderArgs,
    locale: DateLocale,
    date: NaiveDate,
    output: &Output,
) -> Result<ExitCode> {
    let text = require_text(&args.text)?;
    let entry = diary::format_reminder_entry(text, date, locale);

    let content = read_note(&args.diary_path)?;
    let Some(new_content) = diary::add_reminder(&content, &entry) else {
        return Err(LukitError::MissingSeparator(args.diary_path.clone()));
    };
    write_note(&args.diary_path, &new_content)?;

    output.print(&ReminderResponse {
        path: args.diary_path.clone(),
        entry: entry.clone(),
    })?;
    output.info(&format!("Added reminder to {}", args.diary_path.display()));
    Ok(ExitCode::Success)
}
