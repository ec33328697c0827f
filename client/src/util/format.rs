//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::net::types::EMPTY_CELL;

/// Render the date part of an ISO-8601 timestamp as `M/D/YYYY`.
///
/// Missing or unparseable values render as the empty-cell placeholder.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map_or_else(|| EMPTY_CELL.to_owned(), |d| format!("{}/{}/{}", d.month(), d.day(), d.year()))
}

/// Calendar date as written in the timestamp, in its own offset.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}
