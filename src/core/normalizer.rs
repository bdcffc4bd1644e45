//! Turns a raw, human-authored calendar into canonical day windows.
//!
//! Blank times on a working day are filled from [`ScheduleDefaults`].
//! Blank times on a day off resolve to midnight, unless the row carries
//! a real (non-midnight) time: then the day is reclassified as working so
//! the recorded time is not lost.

use crate::errors::{AppError, AppResult};
use crate::models::{DayWindow, RawScheduleRow};
use crate::utils::time::{is_midnight, parse_time};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

pub const DEFAULT_START_TIME: NaiveTime = const_time(9, 0, 0);
pub const DEFAULT_END_TIME: NaiveTime = const_time(18, 0, 0);

/// Only evaluated in constants, so a bad literal fails the build.
const fn const_time(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(t) => t,
        None => panic!("invalid time literal"),
    }
}

/// Times used to fill the blanks of a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDefaults {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_TIME,
            end: DEFAULT_END_TIME,
        }
    }
}

impl ScheduleDefaults {
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let parse = |column: &str, value: &str| {
            parse_time(value).ok_or_else(|| AppError::InvalidTimeFormat {
                row: "defaults".into(),
                column: column.into(),
                value: value.into(),
            })
        };
        Ok(Self {
            start: parse("default_start_time", start)?,
            end: parse("default_end_time", end)?,
        })
    }
}

/// A start or end cell, classified for the resolution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Missing,
    Midnight,
    At(NaiveTime),
}

impl Slot {
    pub fn from_time(t: Option<NaiveTime>) -> Self {
        match t {
            None => Slot::Missing,
            Some(t) if is_midnight(t) => Slot::Midnight,
            Some(t) => Slot::At(t),
        }
    }

    fn or(self, fallback: NaiveTime) -> NaiveTime {
        match self {
            Slot::Missing => fallback,
            Slot::Midnight => NaiveTime::MIN,
            Slot::At(t) => t,
        }
    }
}

/// Resolved times and working flag of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub is_work: bool,
}

/// Resolution table for one row, keyed by the declared flag and the
/// classification of both cells.
pub fn resolve_times(is_work: bool, start: Slot, end: Slot, defaults: &ScheduleDefaults) -> Resolution {
    use Slot::*;

    let day_off = Resolution {
        start: NaiveTime::MIN,
        end: NaiveTime::MIN,
        is_work: false,
    };

    match (is_work, start, end) {
        (true, s, e) => Resolution {
            start: s.or(defaults.start),
            end: e.or(defaults.end),
            is_work: true,
        },

        (false, Missing, Missing)
        | (false, Missing, Midnight)
        | (false, Midnight, Missing)
        | (false, Midnight, Midnight) => day_off,

        // A lone real time on a day off: fill the other side, flip the flag.
        (false, Missing, At(e)) => Resolution {
            start: defaults.start,
            end: e,
            is_work: true,
        },
        (false, At(s), Missing) => Resolution {
            start: s,
            end: defaults.end,
            is_work: true,
        },

        // Both present, at least one real: keep them as given.
        (false, s @ (At(_) | Midnight), e @ (At(_) | Midnight)) => Resolution {
            start: s.or(NaiveTime::MIN),
            end: e.or(NaiveTime::MIN),
            is_work: true,
        },
    }
}

/// Normalizes `rows` into one [`DayWindow`] per row, in input order.
///
/// Fails on the first row with a missing date or flag, an unparsable
/// time, a window ending before it starts, or on two rows sharing a date.
pub fn normalize(rows: &[RawScheduleRow], defaults: &ScheduleDefaults) -> AppResult<Vec<DayWindow>> {
    let windows = rows
        .iter()
        .map(|row| normalize_row(row, defaults))
        .collect::<AppResult<Vec<_>>>()?;

    ensure_unambiguous_labeled(windows.iter().zip(rows.iter().map(|r| r.label.as_str())))?;

    Ok(windows)
}

/// Normalizes a single row.
pub fn normalize_row(row: &RawScheduleRow, defaults: &ScheduleDefaults) -> AppResult<DayWindow> {
    let date = row.date.ok_or_else(|| missing(row, "day"))?;
    let is_work = row.is_work.ok_or_else(|| missing(row, "is_work"))?;

    let start = Slot::from_time(cell_time(row, "start_time", row.start_time.as_deref())?);
    let end = Slot::from_time(cell_time(row, "end_time", row.end_time.as_deref())?);

    let res = resolve_times(is_work, start, end, defaults);

    DayWindow::new(date.and_time(res.start), date.and_time(res.end), res.is_work).map_err(|e| match e {
        AppError::InvalidInput(msg) => AppError::InvalidInput(format!("{}: {}", row.label, msg)),
        other => other,
    })
}

/// Rejects schedules holding more than one window for the same date.
pub fn ensure_unambiguous(schedule: &[DayWindow]) -> AppResult<()> {
    let labels: Vec<String> = schedule
        .iter()
        .enumerate()
        .map(|(i, _)| format!("entry {}", i + 1))
        .collect();
    ensure_unambiguous_labeled(schedule.iter().zip(labels.iter().map(String::as_str)))
}

fn ensure_unambiguous_labeled<'a>(
    windows: impl Iterator<Item = (&'a DayWindow, &'a str)>,
) -> AppResult<()> {
    let mut seen: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for (w, label) in windows {
        seen.entry(w.date()).or_default().push(label.to_string());
    }

    match seen.into_iter().find(|(_, rows)| rows.len() > 1) {
        Some((date, rows)) => Err(AppError::AmbiguousSchedule { date, rows }),
        None => Ok(()),
    }
}

/// Parses an optional time cell; blank cells count as missing.
fn cell_time(row: &RawScheduleRow, column: &str, value: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => parse_time(v).map(Some).ok_or_else(|| AppError::InvalidTimeFormat {
            row: row.label.clone(),
            column: column.into(),
            value: v.into(),
        }),
    }
}

fn missing(row: &RawScheduleRow, field: &str) -> AppError {
    AppError::MissingRequiredField {
        row: row.label.clone(),
        field: field.into(),
    }
}
