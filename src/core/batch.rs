use crate::core::calculator::worktime_seconds;
use crate::errors::{AppError, AppResult};
use crate::models::{CaseResult, DayWindow, WorkCase};

pub struct BatchLogic;

impl BatchLogic {
    /// Measures every case against the same schedule, in input order.
    /// The first failing case aborts the batch and is named in the error.
    pub fn evaluate(schedule: &[DayWindow], cases: &[WorkCase]) -> AppResult<Vec<CaseResult>> {
        cases
            .iter()
            .map(|case| {
                let worked = worktime_seconds(case.start, case.end, schedule).map_err(|e| match e {
                    AppError::InvalidInput(msg) => AppError::InvalidInput(format!("case {}: {}", case.id, msg)),
                    other => other,
                })?;

                Ok(CaseResult {
                    id: case.id.clone(),
                    start: case.start,
                    end: case.end,
                    elapsed_seconds: (case.end - case.start).num_seconds(),
                    worktime_seconds: worked,
                })
            })
            .collect()
    }
}
