use chrono::NaiveDateTime;
use serde::Serialize;

/// An event whose working time is measured: e.g. a ticket opened at
/// `start` and resolved at `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCase {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Outcome of measuring one [`WorkCase`] against a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub elapsed_seconds: i64,
    pub worktime_seconds: i64,
}
