//! CLI argument definitions using clap.

use crate::date::DateLocale;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lukit")]
#[command(
    author,
    version,
    about = "Structured Markdown conventions for a personal knowledge vault",
    long_about = None
)]
pub struct Cli {
    /// Path to the config file (overrides the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Date locale (overrides the configured one)
    #[arg(long, global = true, value_enum)]
    pub locale: Option<DateLocale>,

    /// Operate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Print the structured result as JSON
    #[arg(long, global = true, conflicts_with = "yaml")]
    pub json: bool,

    /// Print the structured result as YAML
    #[arg(long, global = true, conflicts_with = "json")]
    pub yaml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make sure today's day header exists in the diary note
    #[command(name = "ensure-today-header")]
    EnsureTodayHeader(EnsureTodayHeaderArgs),

    /// Add a free-text entry under today's diary header
    #[command(name = "add-text-to-diary")]
    AddTextToDiary(AddTextToDiaryArgs),

    /// Add a note link under today's diary header
    #[command(name = "add-diary-entry")]
    AddDiaryEntry(AddDiaryEntryArgs),

    /// Add a dated reminder to the # Erinnerungen section
    #[command(name = "add-reminder")]
    AddReminder(AddReminderArgs),

    /// Add a dated section to a Vorgang note
    #[command(name = "add-vorgang-section")]
    AddVorgangSection(AddVorgangSectionArgs),

    /// Extract and format summary sections from a Besprechung note
    #[command(name = "besprechung-summary")]
    BesprechungSummary(BesprechungSummaryArgs),

    /// Classify a note as vorgang or diary
    #[command(name = "detect-note-type")]
    DetectNoteType(DetectNoteTypeArgs),

    /// Migrate a note from legacy bold formatting to headings and wikilinks
    #[command(name = "migrate-note")]
    MigrateNote(MigrateNoteArgs),

    /// Write a default config file
    #[command(name = "init-config")]
    InitConfig,
}

#[derive(clap::Args, Debug)]
pub struct EnsureTodayHeaderArgs {
    /// Diary note; falls back to the configured diary note path
    pub diary_path: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct AddTextToDiaryArgs {
    /// Diary note
    pub diary_path: PathBuf,

    /// Entry text
    pub text: String,
}

#[derive(clap::Args, Debug)]
pub struct AddDiaryEntryArgs {
    /// Diary note
    pub diary_path: PathBuf,

    /// Name of the note to link
    pub note_name: String,

    /// Optional heading within the linked note
    pub heading: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct AddReminderArgs {
    /// Diary note
    pub diary_path: PathBuf,

    /// Reminder text; today's date is appended
    pub text: String,
}

#[derive(clap::Args, Debug)]
pub struct AddVorgangSectionArgs {
    /// Vorgang note
    pub path: PathBuf,

    /// Section name; today's date is appended
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct BesprechungSummaryArgs {
    /// Besprechung note
    pub path: PathBuf,

    /// Heading to extract (repeatable; defaults to the configured list)
    #[arg(long = "heading")]
    pub headings: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct DetectNoteTypeArgs {
    /// Note to classify
    pub path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct MigrateNoteArgs {
    /// Note to migrate; the note type is detected automatically
    pub path: PathBuf,

    /// Tag to record in the frontmatter of Vorgang notes
    #[arg(long)]
    pub tag: Option<String>,
}
