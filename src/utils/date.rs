use chrono::NaiveDate;

/// Parses a calendar date. Spreadsheet exports often append a time
/// component to date cells (`2022-05-04 00:00:00`); it is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = s.split([' ', 'T']).next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn weekday_short(d: &NaiveDate) -> String {
    d.format("%a").to_string()
}
