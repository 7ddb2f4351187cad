//! Legacy-format migration: bold pseudo-headings to real headings, plain TOC
//! bullets to wikilinks, and an optional frontmatter tag.
//!
//! Every sub-pass reports how many lines it changed; re-running a migration
//! on its own output changes nothing and reports zero. That idempotence is a
//! hard contract, relied on by callers that migrate whole folders.

use crate::scan;
use serde::Serialize;
use std::fmt;

/// Note classification used to pick the migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    Vorgang,
    Diary,
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteType::Vorgang => write!(f, "vorgang"),
            NoteType::Diary => write!(f, "diary"),
        }
    }
}

/// Result of a migration.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationOutcome {
    /// The transformed document.
    pub content: String,
    /// Total number of lines changed across all sub-passes.
    pub change_count: usize,
}

/// Known top-level legacy section names (lowercased) and their canonical
/// display names. `Fakten` is renamed on migration; the set is a closed
/// vocabulary, not configurable.
const TOP_LEVEL_SECTIONS: [(&str, &str); 4] = [
    ("fakten", "Fakten und Pointer"),
    ("fakten und pointer", "Fakten und Pointer"),
    ("nächste schritte", "Nächste Schritte"),
    ("inhalt", "Inhalt"),
];

fn canonical_top_level(inner: &str) -> Option<&'static str> {
    let lower = inner.trim().to_lowercase();
    TOP_LEVEL_SECTIONS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, canonical)| *canonical)
}

/// Classify a note: anything carrying a `# Inhalt` heading (real or still in
/// legacy bold form) is a Vorgang note, everything else a diary note. Single
/// top-to-bottom scan with early exit.
pub fn detect_note_type(content: &str) -> NoteType {
    for line in content.split('\n') {
        if line.trim() == scan::TOC_HEADING {
            return NoteType::Vorgang;
        }
        if let Some(inner) = scan::standalone_bold(line) {
            if inner.trim().to_lowercase() == "inhalt" {
                return NoteType::Vorgang;
            }
        }
    }
    NoteType::Diary
}

/// Rewrite standalone bold lines outside frontmatter via `convert`, counting
/// changed lines. Frontmatter is tracked with an open/close state machine on
/// successive `---` lines from the top, so a later horizontal rule is never
/// mistaken for a frontmatter delimiter.
fn convert_standalone_bolds<F>(lines: &mut [String], mut convert: F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    let mut changed = 0;
    let mut in_frontmatter = false;
    let mut frontmatter_seen = false;

    for line in lines.iter_mut() {
        if scan::is_separator(line) {
            if !frontmatter_seen {
                frontmatter_seen = true;
                in_frontmatter = true;
                continue;
            }
            if in_frontmatter {
                in_frontmatter = false;
                continue;
            }
        }
        if in_frontmatter {
            continue;
        }
        let Some(inner) = scan::standalone_bold(line).map(str::to_owned) else {
            continue;
        };
        if let Some(replacement) = convert(&inner) {
            *line = replacement;
            changed += 1;
        }
    }
    changed
}

/// Sub-pass 1: known top-level bold sections become level-1 headings with
/// their canonical names.
pub fn convert_top_level_sections(lines: &mut [String]) -> usize {
    convert_standalone_bolds(lines, |inner| {
        canonical_top_level(inner).map(|name| format!("# {}", name))
    })
}

/// Sub-pass 2: every remaining standalone bold line becomes a level-5
/// heading, inner text verbatim.
pub fn convert_bold_to_h5(lines: &mut [String]) -> usize {
    convert_standalone_bolds(lines, |inner| Some(format!("##### {}", inner)))
}

/// Sub-pass 3: plain bullets in the TOC range become `[[#...]]` wikilinks.
/// Already-linked and empty bullets stay untouched.
pub fn convert_toc_entries(lines: &mut [String]) -> usize {
    let Some(toc_index) = scan::find_toc_heading(lines) else {
        return 0;
    };
    let Some(range) = scan::toc_bullet_range(lines, toc_index) else {
        return 0;
    };

    let mut changed = 0;
    for line in &mut lines[range.first..range.after_last] {
        let Some(entry) = line.strip_prefix("- ") else {
            continue;
        };
        if entry.starts_with("[[") && entry.ends_with("]]") {
            continue;
        }
        if entry.trim().is_empty() {
            continue;
        }
        *line = format!("- [[#{}]]", entry);
        changed += 1;
    }
    changed
}

/// Sub-pass 4: record a tag in the frontmatter `tags:` field.
///
/// Counts 1 when the tag was added in any form and 0 when it is already
/// present, when the `tags:` value is outside the known forms, or when
/// frontmatter is absent or unclosed. Every other frontmatter line is
/// preserved byte for byte.
fn insert_frontmatter_tag(lines: &mut Vec<String>, tag: &str) -> usize {
    let Some((_, close)) = scan::frontmatter_range(lines) else {
        return 0;
    };

    let Some(tags_idx) = (1..close).find(|&i| lines[i].trim_start().starts_with("tags:")) else {
        lines.insert(close, format!("  - {}", tag));
        lines.insert(close, "tags:".to_string());
        return 1;
    };

    let rest = lines[tags_idx]
        .trim_start()
        .strip_prefix("tags:")
        .unwrap_or("")
        .trim()
        .to_string();

    if rest.starts_with('[') && rest.ends_with(']') {
        let inner = &rest[1..rest.len() - 1];
        let present = inner
            .split(',')
            .any(|item| strip_item_quotes(item) == tag);
        if present {
            return 0;
        }
        let line = &mut lines[tags_idx];
        let Some(bracket) = line.rfind(']') else {
            return 0;
        };
        if inner.trim().is_empty() {
            line.insert_str(bracket, tag);
        } else {
            line.insert_str(bracket, &format!(", {}", tag));
        }
        return 1;
    }

    if rest.is_empty() {
        // Block-list form, or a bare `tags:` with no items yet.
        let mut last_item = None;
        for i in tags_idx + 1..close {
            let trimmed = lines[i].trim_start();
            let Some(item) = trimmed.strip_prefix("- ") else {
                break;
            };
            if strip_item_quotes(item) == tag {
                return 0;
            }
            last_item = Some(i);
        }
        match last_item {
            Some(i) => {
                let indent: String = lines[i]
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .collect();
                lines.insert(i + 1, format!("{}- {}", indent, tag));
            }
            None => {
                lines.insert(tags_idx + 1, format!("  - {}", tag));
            }
        }
        return 1;
    }

    // Scalar `tags: value` is outside the documented vocabulary; changing it
    // would risk breaking idempotence, so leave it alone.
    0
}

fn strip_item_quotes(item: &str) -> &str {
    item.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Migrate a Vorgang note: top-level sections, remaining bold headings, TOC
/// wikilinks, and optionally a frontmatter tag.
pub fn migrate_vorgang_note(content: &str, add_tag: Option<&str>) -> MigrationOutcome {
    let mut lines = scan::split_lines(content);

    let mut change_count = convert_top_level_sections(&mut lines);
    change_count += convert_bold_to_h5(&mut lines);
    change_count += convert_toc_entries(&mut lines);
    if let Some(tag) = add_tag {
        change_count += insert_frontmatter_tag(&mut lines, tag);
    }

    MigrationOutcome {
        content: lines.join("\n"),
        change_count,
    }
}

/// Migrate a diary note: only the bold-to-h5 conversion applies, diary notes
/// have no top-level sections or TOC.
pub fn migrate_diary_note(content: &str) -> MigrationOutcome {
    let mut lines = scan::split_lines(content);
    let change_count = convert_bold_to_h5(&mut lines);
    MigrationOutcome {
        content: lines.join("\n"),
        change_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_vorgang_by_real_heading() {
        assert_eq!(detect_note_type("# Title\n\n# Inhalt\n- x"), NoteType::Vorgang);
    }

    #[test]
    fn test_detect_vorgang_by_legacy_bold_heading() {
        assert_eq!(detect_note_type("**Inhalt**\n- x"), NoteType::Vorgang);
        assert_eq!(detect_note_type("**INHALT**\n- x"), NoteType::Vorgang);
    }

    #[test]
    fn test_detect_diary_otherwise() {
        assert_eq!(detect_note_type("##### Fr, 06.02.2026\n- x"), NoteType::Diary);
        assert_eq!(detect_note_type(""), NoteType::Diary);
        assert_eq!(detect_note_type("Inhalt in prose only"), NoteType::Diary);
    }

    #[test]
    fn test_convert_bold_to_h5() {
        let mut doc = lines(&["Some text", "**Section One, 01.02.2026**", "- bullet"]);
        assert_eq!(convert_bold_to_h5(&mut doc), 1);
        assert_eq!(doc[1], "##### Section One, 01.02.2026");
    }

    #[test]
    fn test_convert_bold_skips_inline_bold() {
        let mut doc = lines(&["This has **bold** in the middle"]);
        assert_eq!(convert_bold_to_h5(&mut doc), 0);
        assert_eq!(doc[0], "This has **bold** in the middle");
    }

    #[test]
    fn test_convert_bold_skips_frontmatter() {
        let mut doc = lines(&[
            "---",
            "**not a header**",
            "title: test",
            "---",
            "**This is a header, 01.02.2026**",
        ]);
        assert_eq!(convert_bold_to_h5(&mut doc), 1);
        assert_eq!(doc[1], "**not a header**");
        assert_eq!(doc[4], "##### This is a header, 01.02.2026");
    }

    #[test]
    fn test_convert_bold_after_frontmatter_closed() {
        let mut doc = lines(&[
            "---",
            "title: test",
            "---",
            "**Header, 01.02.2026**",
            "---",
            "**Also Header, 02.02.2026**",
        ]);
        assert_eq!(convert_bold_to_h5(&mut doc), 2);
        assert_eq!(doc[3], "##### Header, 01.02.2026");
        assert_eq!(doc[5], "##### Also Header, 02.02.2026");
    }

    #[test]
    fn test_convert_top_level_sections() {
        let mut doc = lines(&["**Fakten**", "- f", "**fakten und pointer**", "**Inhalt**", "**Nächste Schritte**", "**Meeting, 01.02.2026**"]);
        assert_eq!(convert_top_level_sections(&mut doc), 4);
        assert_eq!(doc[0], "# Fakten und Pointer");
        assert_eq!(doc[2], "# Fakten und Pointer");
        assert_eq!(doc[3], "# Inhalt");
        assert_eq!(doc[4], "# Nächste Schritte");
        // Not in the vocabulary: left for the h5 pass.
        assert_eq!(doc[5], "**Meeting, 01.02.2026**");
    }

    #[test]
    fn test_convert_top_level_is_case_insensitive() {
        let mut doc = lines(&["**FAKTEN**", "**inhalt**"]);
        assert_eq!(convert_top_level_sections(&mut doc), 2);
        assert_eq!(doc[0], "# Fakten und Pointer");
        assert_eq!(doc[1], "# Inhalt");
    }

    #[test]
    fn test_convert_toc_entries() {
        let mut doc = lines(&[
            "# Inhalt",
            "- Section One, 01.02.2026",
            "- Section Two, 15.01.2026",
        ]);
        assert_eq!(convert_toc_entries(&mut doc), 2);
        assert_eq!(doc[1], "- [[#Section One, 01.02.2026]]");
        assert_eq!(doc[2], "- [[#Section Two, 15.01.2026]]");
    }

    #[test]
    fn test_convert_toc_skips_linked_and_empty() {
        let mut doc = lines(&["# Inhalt", "- [[#Already Linked, 01.02.2026]]", "- ", "- Plain, 15.01.2026"]);
        assert_eq!(convert_toc_entries(&mut doc), 1);
        assert_eq!(doc[1], "- [[#Already Linked, 01.02.2026]]");
        assert_eq!(doc[2], "- ");
        assert_eq!(doc[3], "- [[#Plain, 15.01.2026]]");
    }

    #[test]
    fn test_convert_toc_without_heading_or_bullets() {
        let mut doc = lines(&["# Title", "- Some bullet"]);
        assert_eq!(convert_toc_entries(&mut doc), 0);

        let mut doc = lines(&["# Inhalt", "", "##### Header"]);
        assert_eq!(convert_toc_entries(&mut doc), 0);
    }

    #[test]
    fn test_convert_toc_only_within_range() {
        let mut doc = lines(&[
            "# Inhalt",
            "- TOC Entry, 01.02.2026",
            "",
            "##### Header, 01.02.2026",
            "- Content bullet, not TOC",
        ]);
        assert_eq!(convert_toc_entries(&mut doc), 1);
        assert_eq!(doc[1], "- [[#TOC Entry, 01.02.2026]]");
        assert_eq!(doc[4], "- Content bullet, not TOC");
    }

    #[test]
    fn test_tag_creates_tags_block() {
        let mut doc = lines(&["---", "title: Test", "---", "body"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 1);
        assert_eq!(
            doc,
            lines(&["---", "title: Test", "tags:", "  - Vorgang", "---", "body"])
        );
    }

    #[test]
    fn test_tag_appends_to_inline_array() {
        let mut doc = lines(&["---", "tags: [alpha, beta]", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 1);
        assert_eq!(doc[1], "tags: [alpha, beta, Vorgang]");
    }

    #[test]
    fn test_tag_fills_empty_inline_array() {
        let mut doc = lines(&["---", "tags: []", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 1);
        assert_eq!(doc[1], "tags: [Vorgang]");
    }

    #[test]
    fn test_tag_skips_present_inline() {
        let mut doc = lines(&["---", "tags: [alpha, Vorgang]", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 0);
        assert_eq!(doc[1], "tags: [alpha, Vorgang]");
    }

    #[test]
    fn test_tag_appends_to_block_list() {
        let mut doc = lines(&["---", "tags:", "  - alpha", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 1);
        assert_eq!(doc, lines(&["---", "tags:", "  - alpha", "  - Vorgang", "---"]));
    }

    #[test]
    fn test_tag_skips_present_in_block_list() {
        let mut doc = lines(&["---", "tags:", "  - Vorgang", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 0);
    }

    #[test]
    fn test_tag_bare_tags_line() {
        let mut doc = lines(&["---", "tags:", "author: x", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 1);
        assert_eq!(doc, lines(&["---", "tags:", "  - Vorgang", "author: x", "---"]));
    }

    #[test]
    fn test_tag_noop_without_frontmatter() {
        let mut doc = lines(&["# Title", "body"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 0);
        assert_eq!(doc, lines(&["# Title", "body"]));
    }

    #[test]
    fn test_tag_noop_with_unclosed_frontmatter() {
        let mut doc = lines(&["---", "title: x", "body"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 0);
    }

    #[test]
    fn test_tag_leaves_scalar_value_untouched() {
        let mut doc = lines(&["---", "tags: projekt", "---"]);
        assert_eq!(insert_frontmatter_tag(&mut doc, "Vorgang"), 0);
        assert_eq!(doc[1], "tags: projekt");
    }

    #[test]
    fn test_migrate_full_legacy_vorgang_note() {
        let content = [
            "---",
            "Created at: 2024-03-28",
            "Author: Lukas",
            "---",
            "",
            "**Fakten**",
            "- Fact one",
            "",
            "**Inhalt**",
            "- Abstimmung mit Daniel, 01.02.2026",
            "- Kick-Off, 15.01.2026",
            "",
            "**Abstimmung mit Daniel, 01.02.2026**",
            "- Discussed budget",
            "",
            "**Kick-Off, 15.01.2026**",
            "- Initial meeting",
        ]
        .join("\n");

        let outcome = migrate_vorgang_note(&content, Some("Vorgang"));

        // 2 top-level + 2 h5 + 2 TOC + 1 tag
        assert_eq!(outcome.change_count, 7);
        assert!(outcome.content.contains("# Fakten und Pointer"));
        assert!(outcome.content.contains("# Inhalt"));
        assert!(outcome.content.contains("##### Abstimmung mit Daniel, 01.02.2026"));
        assert!(outcome.content.contains("- [[#Abstimmung mit Daniel, 01.02.2026]]"));
        assert!(outcome.content.contains("- [[#Kick-Off, 15.01.2026]]"));
        assert!(outcome.content.contains("tags:\n  - Vorgang"));
        assert!(!outcome.content.contains("**Fakten**"));
        // Other frontmatter lines preserved in order.
        let lines: Vec<&str> = outcome.content.split('\n').collect();
        assert_eq!(lines[1], "Created at: 2024-03-28");
        assert_eq!(lines[2], "Author: Lukas");
    }

    #[test]
    fn test_migrate_without_frontmatter_skips_tag() {
        let content = "**Fakten**\n- x\n\n**Inhalt**\n- Meeting, 01.02.2026\n\n**Meeting, 01.02.2026**\n- y";
        let outcome = migrate_vorgang_note(content, Some("Vorgang"));

        // 2 top-level + 1 h5 + 1 TOC; no frontmatter, so no tag.
        assert_eq!(outcome.change_count, 4);
        assert!(outcome.content.contains("# Fakten und Pointer"));
        assert!(outcome.content.contains("# Inhalt"));
        assert!(outcome.content.contains("##### Meeting, 01.02.2026"));
        assert!(outcome.content.contains("- [[#Meeting, 01.02.2026]]"));
        assert!(!outcome.content.contains("tags:"));
    }

    #[test]
    fn test_migrate_already_modern_is_zero_changes() {
        let content = "# Inhalt\n- [[#Section, 01.02.2026]]\n\n##### Section, 01.02.2026\n- note";
        let outcome = migrate_vorgang_note(content, None);
        assert_eq!(outcome.change_count, 0);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn test_migrate_vorgang_is_idempotent() {
        let content = "---\ntitle: x\n---\n**Fakten**\n\n**Inhalt**\n- Old Entry, 01.02.2026\n\n**Old Entry, 01.02.2026**\n- note";
        let first = migrate_vorgang_note(content, Some("Vorgang"));
        let second = migrate_vorgang_note(&first.content, Some("Vorgang"));
        assert_eq!(second.change_count, 0);
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_migrate_mixed_old_and_new() {
        let content = [
            "# Inhalt",
            "- [[#New Entry, 01.02.2026]]",
            "- Old Entry, 15.01.2026",
            "",
            "##### New Entry, 01.02.2026",
            "- new note",
            "",
            "**Old Entry, 15.01.2026**",
            "- old note",
        ]
        .join("\n");

        let outcome = migrate_vorgang_note(&content, None);
        assert_eq!(outcome.change_count, 2);
        assert!(outcome.content.contains("##### Old Entry, 15.01.2026"));
        assert!(outcome.content.contains("- [[#Old Entry, 15.01.2026]]"));
    }

    #[test]
    fn test_migrate_empty_content() {
        let outcome = migrate_vorgang_note("", None);
        assert_eq!(outcome.change_count, 0);
        assert_eq!(outcome.content, "");
    }

    #[test]
    fn test_migrate_diary_note_converts_bold_only() {
        let content = "# Inhalt\n- plain, 01.02.2026\n\n**Freitag, 06.02.2026**\n- x";
        let outcome = migrate_diary_note(content);
        // The TOC bullet is untouched: diary migration only lifts bold lines.
        assert_eq!(outcome.change_count, 1);
        assert!(outcome.content.contains("##### Freitag, 06.02.2026"));
        assert!(outcome.content.contains("- plain, 01.02.2026"));
    }

    #[test]
    fn test_migrate_diary_is_idempotent() {
        let content = "**Mo, 02.02.2026**\n- x\n\n**Di, 03.02.2026**\n- y";
        let first = migrate_diary_note(content);
        assert_eq!(first.change_count, 2);
        let second = migrate_diary_note(&first.content);
        assert_eq!(second.change_count, 0);
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_migrate_preserves_frontmatter() {
        let content = "---\ntitle: Test\ntags: [vorgang]\n---\n\n**Section, 01.02.2026**\n- note";
        let outcome = migrate_vorgang_note(content, None);
        let lines: Vec<&str> = outcome.content.split('\n').collect();
        assert_eq!(lines[0], "---");
        assert_eq!(lines[1], "title: Test");
        assert_eq!(lines[2], "tags: [vorgang]");
        assert_eq!(lines[3], "---");
        assert_eq!(lines[5], "##### Section, 01.02.2026");
    }
}
