//! CLI plumbing: argument definitions, output helpers, and one module per
//! feature area. Every mutating command reads the whole note, applies one
//! engine function, and writes the result back in a single write.

pub mod args;
pub mod diary;
pub mod migration;
pub mod output;
pub mod setup;
pub mod summary;
pub mod vorgang;

use crate::error::{LukitError, Result};
use std::fs;
use std::path::Path;

/// Read a note, mapping a missing file to [`LukitError::FileNotFound`].
pub(crate) fn read_note(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(LukitError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Write a note back in place.
pub(crate) fn write_note(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Trim user-supplied text, rejecting empty input.
pub(crate) fn require_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LukitError::EmptyText);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("  hello  ").unwrap(), "hello");
        assert!(matches!(require_text("   "), Err(LukitError::EmptyText)));
        assert!(matches!(require_text(""), Err(LukitError::EmptyText)));
    }

    #[test]
    fn test_read_note_missing_file() {
        let err = read_note(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, LukitError::FileNotFound(_)));
    }
}
