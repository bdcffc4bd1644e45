// src/export/model.rs

use crate::models::CaseResult;
use crate::utils::secs2readable;
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// Flat row written for each measured case.
#[derive(Serialize, Clone, Debug)]
pub struct ResultExport {
    pub id: String,
    pub start: String,
    pub end: String,
    pub elapsed_seconds: i64,
    pub worktime_seconds: i64,
    pub worktime: String,
}

impl From<&CaseResult> for ResultExport {
    fn from(r: &CaseResult) -> Self {
        Self {
            id: r.id.clone(),
            start: format_timestamp(&r.start),
            end: format_timestamp(&r.end),
            elapsed_seconds: r.elapsed_seconds,
            worktime_seconds: r.worktime_seconds,
            worktime: secs2readable(r.worktime_seconds, true),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "start",
        "end",
        "elapsed_seconds",
        "worktime_seconds",
        "worktime",
    ]
}

pub(crate) fn result_to_row(r: &ResultExport) -> Vec<String> {
    vec![
        r.id.clone(),
        r.start.clone(),
        r.end.clone(),
        r.elapsed_seconds.to_string(),
        r.worktime_seconds.to_string(),
        r.worktime.clone(),
    ]
}
