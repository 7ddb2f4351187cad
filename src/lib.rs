//! LuKit - structured Markdown conventions for a personal knowledge vault.
//!
//! # Overview
//!
//! LuKit maintains a handful of note conventions inside plain Markdown:
//! - a running work diary with date-stamped day sections and bullet entries,
//! - a reminder section (`# Erinnerungen`) between frontmatter and diary body,
//! - Vorgang (case) notes with a `# Inhalt` table of contents linking to
//!   dated subsections, newest first,
//! - meeting-summary extraction from Besprechung notes,
//! - a one-time migration from legacy bold pseudo-headings to real headings.
//!
//! The heart of the crate is a set of pure, line-oriented text transformations
//! that recognize a note's structural landmarks and perform idempotent,
//! position-aware edits while leaving every other byte untouched. No engine
//! function performs I/O; files, config, and exit codes live in the CLI layer.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lukit::date::DateLocale;
//! use lukit::diary;
//!
//! let content = "---\nfm\n---\n[[pinned]]\n---\n";
//! let date = NaiveDate::from_ymd_opt(2026, 2, 6).unwrap();
//!
//! let update = diary::ensure_today_header(content, DateLocale::De, date);
//! assert!(update.content.contains("##### Fr, 06.02.2026"));
//! ```

pub mod cli;
pub mod config;
pub mod date;
pub mod diary;
pub mod error;
pub mod migration;
pub mod scan;
pub mod summary;
pub mod vorgang;

// Re-export main types at crate root
pub use config::Config;
pub use date::DateLocale;
pub use error::{LukitError, Result};
pub use migration::NoteType;
