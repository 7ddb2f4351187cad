//! Persisted CLI configuration.
//!
//! A small JSON file supplying defaults the subcommands would otherwise need
//! on every invocation: the diary note path, the summary headings, and the
//! date locale. Lives at `<config dir>/lukit/config.json`; a missing file
//! simply yields the defaults.

use crate::date::DateLocale;
use crate::error::{LukitError, Result};
use crate::summary::DEFAULT_SUMMARY_HEADINGS;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default diary note for commands invoked without a path.
    pub diary_note_path: Option<PathBuf>,

    /// Headings extracted by `besprechung-summary` when no `--heading` is
    /// given.
    pub summary_headings: Vec<String>,

    /// Date locale; an absent or unknown value falls back to German.
    #[serde(deserialize_with = "locale_or_default")]
    pub locale: DateLocale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diary_note_path: None,
            summary_headings: DEFAULT_SUMMARY_HEADINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            locale: DateLocale::De,
        }
    }
}

fn locale_or_default<'de, D>(deserializer: D) -> std::result::Result<DateLocale, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(DateLocale::from_tag).unwrap_or_default())
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| LukitError::ConfigError("no config directory found".to_string()))?;
        Ok(base.join("lukit").join("config.json"))
    }

    /// Load from the default location; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
