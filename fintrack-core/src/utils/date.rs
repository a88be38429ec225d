//! ISO day helpers for date form fields.
//!
//! Forms carry dates as `YYYY-MM-DD`; values coming back from the API may also be
//! full RFC3339 timestamps, in which case only the date part is kept.

use chrono::{DateTime, NaiveDate};

/// Form representation format.
pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO day, falling back to the date part of an RFC3339 timestamp.
pub fn parse_iso_day(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    NaiveDate::parse_from_str(s, ISO_DAY_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Formats a date for a form field.
pub fn format_iso_day(date: NaiveDate) -> String {
    date.format(ISO_DAY_FORMAT).to_string()
}
