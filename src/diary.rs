//! Work diary operations: the "today" section and its entries, plus the
//! reminder section that lives between the pinned-links zone and the diary
//! body.
//!
//! A diary note is zoned by ordinal `---` separators (see [`crate::scan`]).
//! The day header is a level-5 heading carrying the locale-formatted
//! "weekday, date" string; all entries for that day form a contiguous bullet
//! run directly below it.

use crate::date::{DateLocale, format_date, format_date_with_weekday};
use crate::scan;
use chrono::NaiveDate;
use serde::Serialize;

/// The heading anchoring the reminder section.
pub const REMINDER_HEADING: &str = "# Erinnerungen";

/// Result of [`ensure_today_header`].
#[derive(Debug, Clone, Serialize)]
pub struct HeaderUpdate {
    /// The transformed document.
    pub content: String,
    /// Line index (0-based) of today's header.
    pub header_line: usize,
    /// True when the note had no third separator and the header was appended
    /// at the end instead. Advisory, not fatal.
    pub used_fallback: bool,
}

/// Result of [`add_entry_under_today`].
#[derive(Debug, Clone, Serialize)]
pub struct EntryUpdate {
    /// The transformed document.
    pub content: String,
    /// Line index (0-based) of the inserted entry.
    pub entry_line: usize,
}

/// The level-5 day header for the given date, e.g. `##### Fr, 06.02.2026`.
pub fn today_header(date: NaiveDate, locale: DateLocale) -> String {
    format!("##### {}", format_date_with_weekday(date, locale))
}

fn find_today_header(lines: &[String], after: usize, header: &str) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(after + 1)
        .find(|(_, line)| line.as_str() == header)
        .map(|(i, _)| i)
}

/// Make sure today's day header exists after the third separator.
///
/// Three branches:
/// - no third separator: trim trailing whitespace and append a separator plus
///   the header at the end (`used_fallback` set);
/// - header already present after the separator: return the input unchanged;
/// - otherwise: insert the header directly after the separator line.
pub fn ensure_today_header(content: &str, locale: DateLocale, date: NaiveDate) -> HeaderUpdate {
    let lines = scan::split_lines(content);
    let header = today_header(date, locale);

    let Some(separator) = scan::scan_landmarks(&lines).diary_start else {
        let trimmed = content.trim_end();
        let new_content = format!("{}\n\n---\n{}\n", trimmed, header);
        // The tail is fixed: separator, header, trailing empty line.
        let header_line = new_content.split('\n').count() - 2;
        return HeaderUpdate {
            content: new_content,
            header_line,
            used_fallback: true,
        };
    };

    if let Some(existing) = find_today_header(&lines, separator, &header) {
        return HeaderUpdate {
            content: content.to_string(),
            header_line: existing,
            used_fallback: false,
        };
    }

    let mut lines = lines;
    lines.insert(separator + 1, header);
    HeaderUpdate {
        content: lines.join("\n"),
        header_line: separator + 1,
        used_fallback: false,
    }
}

/// Append an entry to today's bullet run, creating the day header first when
/// needed. The entry always lands after the last contiguous bullet line, or
/// directly below the header when no bullets exist yet.
pub fn add_entry_under_today(
    content: &str,
    entry: &str,
    locale: DateLocale,
    date: NaiveDate,
) -> EntryUpdate {
    let ensured = ensure_today_header(content, locale, date);
    let mut lines = scan::split_lines(&ensured.content);

    let mut insert_at = ensured.header_line + 1;
    while insert_at < lines.len() && lines[insert_at].starts_with("- ") {
        insert_at += 1;
    }

    lines.insert(insert_at, entry.to_string());
    EntryUpdate {
        content: lines.join("\n"),
        entry_line: insert_at,
    }
}

/// `- text`
pub fn format_text_entry(text: &str) -> String {
    format!("- {}", text)
}

/// `- [[note]]`, or `- [[note#heading|note: heading]]` with a heading.
pub fn format_link_entry(note_name: &str, heading: Option<&str>) -> String {
    match heading {
        Some(heading) => format!(
            "- [[{note}#{heading}|{note}: {heading}]]",
            note = note_name,
            heading = heading
        ),
        None => format!("- [[{}]]", note_name),
    }
}

/// `- text, <formatted date>`
pub fn format_reminder_entry(text: &str, date: NaiveDate, locale: DateLocale) -> String {
    format!("- {}, {}", text, format_date(date, locale))
}

/// Insert a reminder entry into the `# Erinnerungen` section, newest first.
///
/// The section lives between the second separator (or document start) and the
/// third separator. When the heading exists, the entry goes directly below it;
/// otherwise the section is created directly before the third separator, with
/// a blank line before it only when the preceding line is non-blank.
///
/// Returns `None` when the note has no third separator; the document is then
/// left untouched and the caller decides how to report it.
pub fn add_reminder(content: &str, entry: &str) -> Option<String> {
    let mut lines = scan::split_lines(content);
    let marks = scan::scan_landmarks(&lines);
    let separator = marks.diary_start?;

    let search_from = marks.pinned_end.map(|i| i + 1).unwrap_or(0);
    let heading = lines[search_from..separator]
        .iter()
        .position(|l| l.trim() == REMINDER_HEADING)
        .map(|i| i + search_from);

    match heading {
        Some(heading) => {
            lines.insert(heading + 1, entry.to_string());
        }
        None => {
            let mut block = Vec::new();
            if separator > 0 && !lines[separator - 1].trim().is_empty() {
                block.push(String::new());
            }
            block.push(REMINDER_HEADING.to_string());
            block.push(entry.to_string());
            block.push(String::new());
            lines.splice(separator..separator, block);
        }
    }

    Some(lines.join("\n"))
}
