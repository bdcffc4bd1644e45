use chrono::NaiveDate;

/// One row of a raw, human-authored calendar table.
///
/// Date and working flag are required but stay optional here so the
/// normalizer can report which row is missing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScheduleRow {
    pub label: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_work: Option<bool>,
}

impl RawScheduleRow {
    pub fn new(
        label: impl Into<String>,
        date: NaiveDate,
        start_time: Option<&str>,
        end_time: Option<&str>,
        is_work: bool,
    ) -> Self {
        Self {
            label: label.into(),
            date: Some(date),
            start_time: start_time.map(str::to_string),
            end_time: end_time.map(str::to_string),
            is_work: Some(is_work),
        }
    }
}
