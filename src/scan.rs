//! Document structure scanning.
//!
//! LuKit notes use `---` separator lines ordinally as a structural grammar:
//! frontmatter sits between the 1st and 2nd separator, pinned links between
//! the 2nd and 3rd, and the diary body after the 3rd. This module recognizes
//! those landmarks plus the other line-level structures the engines share
//! (TOC bullet runs, standalone bold pseudo-headings). Everything operates on
//! a line array produced by splitting on `\n`; nothing here mutates content.

use regex::Regex;
use std::sync::LazyLock;

// Standalone bold pseudo-heading: the whole (trimmed) line is **text**.
static STANDALONE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+)\*\*$").unwrap());

/// The heading anchoring a Vorgang table of contents.
pub const TOC_HEADING: &str = "# Inhalt";

/// A line counts as a separator when its trimmed content is exactly `---`.
pub fn is_separator(line: &str) -> bool {
    line.trim() == "---"
}

/// Index of the n-th (1-based) separator line, if present.
pub fn nth_separator(lines: &[String], n: usize) -> Option<usize> {
    let mut seen = 0;
    for (i, line) in lines.iter().enumerate() {
        if is_separator(line) {
            seen += 1;
            if seen == n {
                return Some(i);
            }
        }
    }
    None
}

/// Named landmark indices of a diary note, from a single separator scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmarks {
    /// 1st separator: closes the frontmatter block.
    pub frontmatter_end: Option<usize>,
    /// 2nd separator: closes the pinned-links zone.
    pub pinned_end: Option<usize>,
    /// 3rd separator: the diary body starts after this line.
    pub diary_start: Option<usize>,
}

/// Collect the first three separator positions in one pass.
pub fn scan_landmarks(lines: &[String]) -> Landmarks {
    let mut found = [None; 3];
    let mut seen = 0;
    for (i, line) in lines.iter().enumerate() {
        if is_separator(line) {
            found[seen] = Some(i);
            seen += 1;
            if seen == 3 {
                break;
            }
        }
    }
    Landmarks {
        frontmatter_end: found[0],
        pinned_end: found[1],
        diary_start: found[2],
    }
}

/// Frontmatter delimiter pair `(open, close)`: the document must open with a
/// separator on its first line and a second separator must follow. Returns
/// `None` for absent or unclosed frontmatter.
pub fn frontmatter_range(lines: &[String]) -> Option<(usize, usize)> {
    if !lines.first().is_some_and(|l| is_separator(l)) {
        return None;
    }
    let close = lines[1..].iter().position(|l| is_separator(l))? + 1;
    Some((0, close))
}

/// Inner text of a legacy bold pseudo-heading (`**text**` standing alone on
/// the line). Nested bold markers and blank inner text are rejected.
pub fn standalone_bold(line: &str) -> Option<&str> {
    let inner = STANDALONE_BOLD
        .captures(line.trim())
        .and_then(|cap| cap.get(1))?
        .as_str();
    if inner.contains("**") || inner.trim().is_empty() {
        return None;
    }
    Some(inner)
}

/// Index of the `# Inhalt` heading, if present.
pub fn find_toc_heading(lines: &[String]) -> Option<usize> {
    lines.iter().position(|l| l.trim() == TOC_HEADING)
}

/// The contiguous bullet run of a table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletRange {
    /// First bullet line.
    pub first: usize,
    /// One past the last bullet line.
    pub after_last: usize,
}

/// Locate the TOC bullet run following the heading at `toc_index`.
///
/// Blank lines between bullets continue the run; any other heading or
/// non-blank non-bullet text terminates it. `None` when no bullet follows.
pub fn toc_bullet_range(lines: &[String], toc_index: usize) -> Option<BulletRange> {
    let mut first = None;
    for (i, line) in lines.iter().enumerate().skip(toc_index + 1) {
        if line.starts_with('#') {
            break;
        }
        if line.starts_with("- ") {
            if first.is_none() {
                first = Some(i);
            }
        } else if first.is_some() && !line.trim().is_empty() {
            break;
        }
    }
    let first = first?;

    let mut after_last = first + 1;
    for (i, line) in lines.iter().enumerate().skip(first + 1) {
        if line.starts_with("- ") {
            after_last = i + 1;
        } else if line.trim().is_empty() {
            continue;
        } else {
            break;
        }
    }
    Some(BulletRange { first, after_last })
}

/// First level-5 heading at or after `from`.
pub fn find_h5(lines: &[String], from: usize) -> Option<usize> {
    lines[from.min(lines.len())..]
        .iter()
        .position(|l| l.starts_with("##### "))
        .map(|i| i + from)
}

/// Drop trailing blank lines from a line array.
pub fn trim_trailing_blank(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
}

/// Split content into lines, preserving trailing empties so that a rejoin is
/// byte-identical.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}
