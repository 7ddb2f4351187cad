//! Besprechung (meeting) summaries: extract named level-3 sections from a
//! note and concatenate them into a formatted block.

/// Section headings extracted when the caller supplies none.
pub const DEFAULT_SUMMARY_HEADINGS: [&str; 2] = ["Nächste Schritte", "Zusammenfassung"];

/// Body of the `### <heading>` section, without the heading line.
///
/// Capture runs until the next level-3 heading; deeper headings (`####` and
/// below) belong to the body. Leading and trailing blank lines are stripped.
/// Returns `None` both for a missing heading and for a body that is empty
/// after stripping; callers cannot tell the two apart.
pub fn extract_section(content: &str, heading: &str) -> Option<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let target = format!("### {}", heading);

    let start = lines.iter().position(|l| l.trim() == target)? + 1;
    let end = lines[start..]
        .iter()
        .position(|l| l.trim_end().starts_with("### "))
        .map(|i| i + start)
        .unwrap_or(lines.len());

    let mut body = &lines[start..end];
    while body.first().is_some_and(|l| l.trim().is_empty()) {
        body = &body[1..];
    }
    while body.last().is_some_and(|l| l.trim().is_empty()) {
        body = &body[..body.len() - 1];
    }

    if body.is_empty() {
        return None;
    }
    Some(body.join("\n"))
}

/// Concatenate the requested sections as `**<heading>**\n<body>` blocks,
/// joined by blank lines, in the caller's heading order. `None` when no
/// section was found (an empty heading list finds nothing).
pub fn format_summary(content: &str, headings: &[String]) -> Option<String> {
    let parts: Vec<String> = headings
        .iter()
        .filter_map(|heading| {
            extract_section(content, heading).map(|body| format!("**{}**\n{}", heading, body))
        })
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("\n\n"))
}
