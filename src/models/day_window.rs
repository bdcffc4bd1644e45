use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Working boundaries of one calendar day.
///
/// A non-working day is canonically a zero-width window at midnight
/// (`start == end == YYYY-MM-DD 00:00:00`), see [`DayWindow::day_off`].
/// Instances are immutable: the only way to obtain one is through a
/// validating constructor, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDayWindow", into = "RawDayWindow")]
pub struct DayWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    is_work: bool,
}

impl DayWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, is_work: bool) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidInput(format!(
                "day window starts at {} but ends earlier, at {}",
                format_timestamp(&start),
                format_timestamp(&end)
            )));
        }
        Ok(Self {
            start,
            end,
            is_work,
        })
    }

    /// Zero-width, non-working window at midnight of `date`.
    pub fn day_off(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        Self {
            start: midnight,
            end: midnight,
            is_work: false,
        }
    }

    /// Builds a window from `YYYY-MM-DD HH:MM[:SS]` strings.
    pub fn from_strings(start: &str, end: &str, is_work: bool) -> AppResult<Self> {
        let s = parse_timestamp(start).ok_or_else(|| AppError::InvalidTimestamp(start.to_string()))?;
        let e = parse_timestamp(end).ok_or_else(|| AppError::InvalidTimestamp(end.to_string()))?;
        Self::new(s, e, is_work)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn is_work(&self) -> bool {
        self.is_work
    }

    /// Calendar date the window belongs to.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Width of the window, whatever the working flag says.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the window touches the closed span `[start, end]`.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start <= end && start <= self.end
    }
}

/// Unchecked wire form; converted through [`DayWindow::new`] on the way in.
#[derive(Serialize, Deserialize)]
struct RawDayWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    is_work: bool,
}

impl TryFrom<RawDayWindow> for DayWindow {
    type Error = AppError;

    fn try_from(raw: RawDayWindow) -> AppResult<Self> {
        DayWindow::new(raw.start, raw.end, raw.is_work)
    }
}

impl From<DayWindow> for RawDayWindow {
    fn from(w: DayWindow) -> Self {
        Self {
            start: w.start,
            end: w.end,
            is_work: w.is_work,
        }
    }
}
