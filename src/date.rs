//! Locale-aware date formatting for headers and entries.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported date locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
    /// German: DD.MM.YYYY, weekdays So..Sa.
    #[default]
    De,
    /// English: MM/DD/YYYY, weekdays Sun..Sat.
    En,
    /// ISO 8601: YYYY-MM-DD, no weekday.
    Iso,
}

const GERMAN_WEEKDAYS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];
const ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl DateLocale {
    /// Short tag used in config files and CLI output.
    pub fn tag(self) -> &'static str {
        match self {
            DateLocale::De => "de",
            DateLocale::En => "en",
            DateLocale::Iso => "iso",
        }
    }

    /// Parse a locale tag, falling back to German for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "en" => DateLocale::En,
            "iso" => DateLocale::Iso,
            _ => DateLocale::De,
        }
    }
}

/// Format a date in the given locale, fields zero-padded.
pub fn format_date(date: NaiveDate, locale: DateLocale) -> String {
    let day = date.day();
    let month = date.month();
    let year = date.year();

    match locale {
        DateLocale::De => format!("{:02}.{:02}.{:04}", day, month, year),
        DateLocale::En => format!("{:02}/{:02}/{:04}", month, day, year),
        DateLocale::Iso => format!("{:04}-{:02}-{:02}", year, month, day),
    }
}

/// Weekday abbreviation for the given locale; `None` for ISO.
pub fn format_weekday(date: NaiveDate, locale: DateLocale) -> Option<&'static str> {
    let index = date.weekday().num_days_from_sunday() as usize;
    match locale {
        DateLocale::De => Some(GERMAN_WEEKDAYS[index]),
        DateLocale::En => Some(ENGLISH_WEEKDAYS[index]),
        DateLocale::Iso => None,
    }
}

/// `"<weekday>, <date>"` when the locale has weekdays, else just the date.
pub fn format_date_with_weekday(date: NaiveDate, locale: DateLocale) -> String {
    let date_str = format_date(date, locale);
    match format_weekday(date, locale) {
        Some(weekday) => format!("{}, {}", weekday, date_str),
        None => date_str,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friday() -> NaiveDate {
        // 2026-02-06 is a Friday
        NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()
    }

    #[test]
    fn test_format_date_de() {
        assert_eq!(format_date(friday(), DateLocale::De), "06.02.2026");
    }

    #[test]
    fn test_format_date_en() {
        assert_eq!(format_date(friday(), DateLocale::En), "02/06/2026");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date(friday(), DateLocale::Iso), "2026-02-06");
    }

    #[test]
    fn test_format_date_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_date(date, DateLocale::De), "05.01.2026");
        assert_eq!(format_date(date, DateLocale::En), "01/05/2026");
        assert_eq!(format_date(date, DateLocale::Iso), "2026-01-05");
    }

    #[test]
    fn test_format_weekday_de() {
        assert_eq!(format_weekday(friday(), DateLocale::De), Some("Fr"));
    }

    #[test]
    fn test_format_weekday_en() {
        assert_eq!(format_weekday(friday(), DateLocale::En), Some("Fri"));
    }

    #[test]
    fn test_format_weekday_iso_is_none() {
        assert_eq!(format_weekday(friday(), DateLocale::Iso), None);
    }

    #[test]
    fn test_format_weekday_sunday() {
        // 2026-02-08 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
        assert_eq!(format_weekday(sunday, DateLocale::De), Some("So"));
        assert_eq!(format_weekday(sunday, DateLocale::En), Some("Sun"));
    }

    #[test]
    fn test_format_date_with_weekday() {
        assert_eq!(
            format_date_with_weekday(friday(), DateLocale::De),
            "Fr, 06.02.2026"
        );
        assert_eq!(
            format_date_with_weekday(friday(), DateLocale::En),
            "Fri, 02/06/2026"
        );
        assert_eq!(
            format_date_with_weekday(friday(), DateLocale::Iso),
            "2026-02-06"
        );
    }

    #[test]
    fn test_locale_tags() {
        assert_eq!(DateLocale::De.tag(), "de");
        assert_eq!(DateLocale::from_tag("en"), DateLocale::En);
        assert_eq!(DateLocale::from_tag("iso"), DateLocale::Iso);
        assert_eq!(DateLocale::from_tag("nonsense"), DateLocale::De);
        assert_eq!(DateLocale::from_tag(""), DateLocale::De);
    }
}
