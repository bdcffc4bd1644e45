//! Time utilities: parsing time-of-day strings and full timestamps.

use chrono::{NaiveDateTime, NaiveTime};

/// Time-of-day formats accepted in schedule cells.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Timestamp formats accepted for case boundaries and schedule windows.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn is_midnight(t: NaiveTime) -> bool {
    t == NaiveTime::MIN
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
