//! Migration CLI commands.

use crate::cli::args::{DetectNoteTypeArgs, MigrateNoteArgs};
use crate::cli::output::Output;
use crate::cli::{read_note, write_note};
use crate::error::{ExitCode, Result};
use crate::migration::{self, NoteType};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct DetectResponse {
    path: PathBuf,
    note_type: NoteType,
}

#[derive(Debug, Serialize)]
struct MigrateResponse {
    path: PathBuf,
    note_type: NoteType,
    change_count: usize,
}

pub fn detect_note_type(args: &DetectNoteTypeArgs, output: &Output) -> Result<ExitCode> {
    let content = read_note(&args.path)?;
    let note_type = migration::detect_note_type(&content);

    if output.is_structured() {
        output.print(&DetectResponse {
            path: args.path.clone(),
            note_type,
        })?;
    } else {
        output.print_raw(&note_type.to_string());
    }
    Ok(ExitCode::Success)
}

pub fn migrate_note(args: &MigrateNoteArgs, output: &Output) -> Result<ExitCode> {
    let content = read_note(&args.path)?;
    let note_type = migration::detect_note_type(&content);

    let outcome = match note_type {
        NoteType::Vorgang => migration::migrate_vorgang_note(&content, args.tag.as_deref()),
        NoteType::Diary => migration::migrate_diary_note(&content),
    };

    if outcome.change_count > 0 {
        write_note(&args.path, &outcome.content)?;
    }

    output.print(&MigrateResponse {
        path: args.path.clone(),
        note_type,
        change_count: outcome.change_count,
    })?;
    output.info(&format!(
        "Migrated {} as {} note ({} changes)",
        args.path.display(),
        note_type,
        outcome.change_count
    ));
    Ok(ExitCode::Success)
}
