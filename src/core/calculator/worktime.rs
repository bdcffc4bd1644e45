//! Working time between two timestamps, reduced over a schedule of day
//! windows.

use crate::errors::{AppError, AppResult};
use crate::models::DayWindow;
use crate::utils::time::format_timestamp;
use chrono::{NaiveDateTime, TimeDelta};

/// Working time elapsed between `start` and `end` according to `schedule`.
///
/// The schedule is read-only: a sorted, filtered snapshot of references is
/// reduced instead of the caller's slice. Windows are reduced as follows:
///
/// - only windows touching `[start, end]` are considered;
/// - a single surviving window yields `end - start` when both timestamps
///   share a calendar date; otherwise, if working, `window.end - start`
///   when it lies on the start date (`end - window.start` on the end date);
/// - with two or more, interior windows add their full width when working,
///   the first adds `first.end - start` and the last `end - last.start`
///   (each only when working).
///
/// At most one window per calendar date is expected; see
/// [`ensure_unambiguous`](crate::core::normalizer::ensure_unambiguous).
pub fn worktime(
    start: NaiveDateTime,
    end: NaiveDateTime,
    schedule: &[DayWindow],
) -> AppResult<TimeDelta> {
    if schedule.is_empty() {
        return Err(AppError::InvalidInput("schedule is empty".into()));
    }
    if start > end {
        return Err(AppError::InvalidInput(format!(
            "start {} is later than end {}",
            format_timestamp(&start),
            format_timestamp(&end)
        )));
    }

    let mut days: Vec<&DayWindow> = schedule.iter().filter(|w| w.overlaps(start, end)).collect();
    days.sort_by_key(|w| w.start());

    let total = match days.as_slice() {
        [] => TimeDelta::zero(),

        // Same-date spans are credited whole, without looking at the flag.
        [_] if start.date() == end.date() => end - start,

        // A span crossing midnight that meets a single day: that day is the
        // head, the tail or a full day of the span, depending on its date.
        [only] if !only.is_work() => TimeDelta::zero(),
        [only] if only.date() == start.date() => only.end() - start,
        [only] if only.date() == end.date() => end - only.start(),
        [only] => only.duration(),

        [first, interior @ .., last] => {
            let full_days = interior
                .iter()
                .filter(|w| w.is_work())
                .fold(TimeDelta::zero(), |acc, w| acc + w.duration());

            let head = if first.is_work() {
                first.end() - start
            } else {
                TimeDelta::zero()
            };
            let tail = if last.is_work() {
                end - last.start()
            } else {
                TimeDelta::zero()
            };

            head + full_days + tail
        }
    };

    Ok(total)
}

/// Same as [`worktime`], as a whole second count.
pub fn worktime_seconds(
    start: NaiveDateTime,
    end: NaiveDateTime,
    schedule: &[DayWindow],
) -> AppResult<i64> {
    worktime(start, end, schedule).map(|d| d.num_seconds())
}
