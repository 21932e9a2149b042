//! Date detection by column name and timestamp parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParcoordsError, Result};
use crate::table::ColumnData;

/// How a matched value is turned into a timestamp.
enum Layout {
    /// Date only; time is midnight.
    Date(&'static [&'static str]),
    /// Date and time without offset.
    DateTime(&'static [&'static str]),
    /// RFC 3339 with offset, converted to UTC.
    Rfc3339,
}

// Patterns compiled once on first use. Order matters: the first pattern that
// matches decides the layout.
static DATE_PATTERNS: Lazy<Vec<(Regex, Layout)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap(), Layout::Date(&["%Y-%m-%d"])),
        (
            Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:\d{2})$").unwrap(),
            Layout::Rfc3339,
        ),
        (
            Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}[T ]\d{1,2}:\d{2}(:\d{2}(\.\d+)?)?$").unwrap(),
            Layout::DateTime(&[
                "%Y-%m-%dT%H:%M:%S",
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%dT%H:%M",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%d %H:%M",
            ]),
        ),
        (Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap(), Layout::Date(&["%m/%d/%Y"])),
        (
            Regex::new(r"^\d{1,2}/\d{1,2}/\d{4} \d{1,2}:\d{2}(:\d{2})?$").unwrap(),
            Layout::DateTime(&["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"]),
        ),
        (Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").unwrap(), Layout::Date(&["%d.%m.%Y"])),
        (Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}$").unwrap(), Layout::Date(&["%Y/%m/%d"])),
        (Regex::new(r"^\d{8}$").unwrap(), Layout::Date(&["%Y%m%d"])),
    ]
});

/// Whether a column name marks it as holding dates.
pub fn is_date_column_name(name: &str) -> bool {
    name.to_lowercase().contains("date")
}

/// Parse a single value into a timestamp.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    let (_, layout) = DATE_PATTERNS.iter().find(|(re, _)| re.is_match(value))?;
    match layout {
        Layout::Date(formats) => formats
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0)),
        Layout::DateTime(formats) => formats
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok()),
        Layout::Rfc3339 => DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.naive_utc()),
    }
}

/// Convert a column to timestamps.
///
/// Returns `Ok(None)` when the column already holds timestamps. Missing values
/// stay missing; any other value that does not parse is an error.
pub(crate) fn parse_date_column(name: &str, data: &ColumnData) -> Result<Option<ColumnData>> {
    if matches!(data, ColumnData::DateTime(_)) {
        return Ok(None);
    }

    let mut parsed = Vec::with_capacity(data.len());
    for row in 0..data.len() {
        let value = match data.display(row) {
            None => None,
            Some(text) => Some(parse_timestamp(&text).ok_or_else(|| ParcoordsError::DateParse {
                column: name.to_string(),
                value: text.clone(),
            })?),
        };
        parsed.push(value);
    }

    Ok(Some(ColumnData::DateTime(parsed)))
}
