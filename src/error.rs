//! Error types and exit codes for LuKit.
//!
//! The engine modules ([`crate::diary`], [`crate::vorgang`], [`crate::summary`],
//! [`crate::migration`]) are total over their input domain and never return
//! errors; everything here belongs to the CLI/file boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the `lukit` binary.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const FILE_NOT_FOUND: i32 = 2;
    pub const EMPTY_TEXT: i32 = 3;
    pub const MISSING_SEPARATOR: i32 = 4;
}

/// Main error type for LuKit operations.
#[derive(Error, Debug)]
pub enum LukitError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Note is missing the third separator (---): {0}")]
    MissingSeparator(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LukitError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LukitError::FileNotFound(_) => exit_code::FILE_NOT_FOUND,
            LukitError::EmptyText => exit_code::EMPTY_TEXT,
            LukitError::MissingSeparator(_) => exit_code::MISSING_SEPARATOR,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for LuKit operations.
pub type Result<T> = std::result::Result<T, LukitError>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    GeneralError,
    FileNotFound,
    EmptyText,
    MissingSeparator,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::GeneralError => exit_code::GENERAL_ERROR,
            ExitCode::FileNotFound => exit_code::FILE_NOT_FOUND,
            ExitCode::EmptyText => exit_code::EMPTY_TEXT,
            ExitCode::MissingSeparator => exit_code::MISSING_SEPARATOR,
        }
    }
}
