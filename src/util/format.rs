//! Date, time, and weekday rendering for appointment listings.
//!
//! Timestamps from the backend are naive ISO strings. The wall-clock value in
//! the string is rendered as-is; offsets, when present, are not converted.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

const DAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Weekday name for a Sunday-first index (0..=6).
pub fn day_name(index: usize) -> Option<&'static str> {
    DAY_NAMES.get(index).copied()
}

/// Parse RFC 3339, naive ISO date-time, or a bare `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok()) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `January 5, 2025`.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| INVALID_DATE.to_owned(), |dt| dt.format("%B %-d, %Y").to_string())
}

/// `09:30 AM`.
pub fn format_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| INVALID_DATE.to_owned(), |dt| dt.format("%I:%M %p").to_string())
}

/// `January 5, 2025 at 09:30 AM`.
pub fn format_date_time(raw: &str) -> String {
    format!("{} at {}", format_date(raw), format_time(raw))
}
