//! Vorgang notes: a `# Inhalt` table of contents linking to dated level-5
//! subsections, newest first.
//!
//! Adding a section produces a TOC bullet (`- [[#Name, date]]`) and the
//! matching subsection heading (`##### Name, date`), always inserted before
//! all pre-existing subsections so the note reads reverse-chronologically.
//! The returned cursor line points at the blank stub directly below the new
//! heading, ready for typing.

use crate::date::{DateLocale, format_date};
use crate::scan;
use chrono::NaiveDate;
use serde::Serialize;

/// Result of [`add_section`].
#[derive(Debug, Clone, Serialize)]
pub struct SectionUpdate {
    /// The transformed document.
    pub content: String,
    /// Line index (0-based) of the blank line under the new heading.
    pub cursor_line: usize,
}

/// `Name, <date>` — shared by the heading and its TOC bullet so the wikilink
/// target always matches.
pub fn heading_text(name: &str, date: NaiveDate, locale: DateLocale) -> String {
    format!("{}, {}", name, format_date(date, locale))
}

/// `##### Name, <date>`
pub fn section_header(name: &str, date: NaiveDate, locale: DateLocale) -> String {
    format!("##### {}", heading_text(name, date, locale))
}

/// `- [[#Name, <date>]]`
pub fn toc_bullet(name: &str, date: NaiveDate, locale: DateLocale) -> String {
    format!("- [[#{}]]", heading_text(name, date, locale))
}

/// Add a new dated section: TOC bullet first in the run, subsection heading
/// before all existing subsections.
pub fn add_section(
    content: &str,
    name: &str,
    locale: DateLocale,
    date: NaiveDate,
) -> SectionUpdate {
    let mut lines = scan::split_lines(content);
    let bullet = toc_bullet(name, date, locale);
    let header = section_header(name, date, locale);

    let Some(toc_index) = scan::find_toc_heading(&lines) else {
        // No TOC yet: append a fresh # Inhalt block plus the first section.
        let trimmed = content.trim_end();
        let new_content = format!(
            "{}\n{}\n\n{}\n\n{}\n\n\n",
            trimmed,
            scan::TOC_HEADING,
            bullet,
            header
        );
        let cursor_line = new_content.split('\n').count() - 3;
        return SectionUpdate {
            content: new_content,
            cursor_line,
        };
    };

    let Some(range) = scan::toc_bullet_range(&lines, toc_index) else {
        // TOC exists but holds no bullets yet.
        let bullet_at = toc_index + 1;
        lines.insert(bullet_at, bullet);

        if let Some(first_h5) = scan::find_h5(&lines, bullet_at + 1) {
            let stub = [String::new(), header, String::new(), String::new()];
            lines.splice(first_h5..first_h5, stub);
            return SectionUpdate {
                content: lines.join("\n"),
                cursor_line: first_h5 + 2,
            };
        }

        return append_section_at_end(lines, header);
    };

    // Normal case: insert as the first bullet, then place the heading before
    // the first existing subsection.
    lines.insert(range.first, bullet);

    let after_bullets = range.after_last + 1;
    if let Some(first_h5) = scan::find_h5(&lines, after_bullets) {
        let stub = [header, String::new(), String::new()];
        lines.splice(first_h5..first_h5, stub);
        return SectionUpdate {
            content: lines.join("\n"),
            cursor_line: first_h5 + 1,
        };
    }

    append_section_at_end(lines, header)
}

fn append_section_at_end(mut lines: Vec<String>, header: String) -> SectionUpdate {
    scan::trim_trailing_blank(&mut lines);
    lines.extend([
        String::new(),
        header,
        String::new(),
        String::new(),
        String::new(),
    ]);
    let cursor_line = lines.len() - 3;
    SectionUpdate {
        content: lines.join("\n"),
        cursor_line,
    }
}
