// src/export/excel_date.rs

use crate::utils::time::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime};

/// Interprets a string as a timestamp, returning the Excel serial and the
/// number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    parse_timestamp(s).and_then(|dt| Some(("yyyy-mm-dd hh:mm:ss", naive_datetime_to_excel_serial(&dt)?)))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
