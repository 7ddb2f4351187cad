//! LuKit CLI entry point.

use chrono::Local;
use clap::Parser;
use lukit::cli::args::{Cli, Commands};
use lukit::cli::output::Output;
use lukit::cli::{diary, migration, setup, summary, vorgang};
use lukit::config::Config;
use lukit::error::{ExitCode as LukitExitCode, LukitError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<LukitExitCode, LukitError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // "Today" is a CLI concern; the engine always takes an explicit date.
    let locale = cli.locale.unwrap_or(config.locale);
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::EnsureTodayHeader(args) => {
            diary::ensure_today_header(args, &config, locale, date, &output)
        }
        Commands::AddTextToDiary(args) => diary::add_text_to_diary(args, locale, date, &output),
        Commands::AddDiaryEntry(args) => diary::add_diary_entry(args, locale, date, &output),
        Commands::AddReminder(args) => diary::add_reminder(args, locale, date, &output),
        Commands::AddVorgangSection(args) => vorgang::add_section(args, locale, date, &output),
        Commands::BesprechungSummary(args) => {
            summary::besprechung_summary(args, &config, &output)
        }
        Commands::DetectNoteType(args) => migration::detect_note_type(args, &output),
        Commands::MigrateNote(args) => migration::migrate_note(args, &output),
        Commands::InitConfig => setup::init_config(cli.config.clone(), &output),
    }
}
