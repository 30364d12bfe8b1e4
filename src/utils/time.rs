//! Date helpers for the wire format

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;

/// Parse a `YYYY-MM-DD` date; malformed input yields `None`
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
