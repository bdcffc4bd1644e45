//! CSV readers for schedule tables and case tables.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{RawScheduleRow, WorkCase};
use crate::utils::date::parse_date;
use crate::utils::time::parse_timestamp;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct Loader;

impl Loader {
    pub fn load_schedule(path: &Path, cfg: &Config) -> AppResult<Vec<RawScheduleRow>> {
        let file = File::open(path)?;
        Self::read_schedule(file, cfg)
    }

    pub fn load_cases(path: &Path, cfg: &Config) -> AppResult<Vec<WorkCase>> {
        let file = File::open(path)?;
        Self::read_cases(file, cfg)
    }

    /// Reads raw schedule rows. Cells are kept as text: interpreting times
    /// and filling blanks is the normalizer's job.
    pub fn read_schedule<R: Read>(reader: R, cfg: &Config) -> AppResult<Vec<RawScheduleRow>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(cfg.delimiter_byte()?)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let day = required_column(&headers, &cfg.day_column)?;
        let start = required_column(&headers, &cfg.start_time_column)?;
        let end = required_column(&headers, &cfg.end_time_column)?;
        let flag = required_column(&headers, &cfg.is_work_column)?;
        let label_col = column(&headers, &cfg.label_column);

        let mut rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let label = label_col
                .and_then(|c| cell(&record, c))
                .map(str::to_string)
                .unwrap_or_else(|| format!("row {}", i + 1));

            let date = match cell(&record, day) {
                None => None,
                Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(format!("{label}: {d}")))?),
            };
            let is_work = match cell(&record, flag) {
                None => None,
                Some(v) => Some(parse_flag(v).ok_or_else(|| AppError::InvalidFlag {
                    row: label.clone(),
                    value: v.to_string(),
                })?),
            };

            rows.push(RawScheduleRow {
                label,
                date,
                start_time: cell(&record, start).map(str::to_string),
                end_time: cell(&record, end).map(str::to_string),
                is_work,
            });
        }

        Ok(rows)
    }

    pub fn read_cases<R: Read>(reader: R, cfg: &Config) -> AppResult<Vec<WorkCase>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(cfg.delimiter_byte()?)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let start = required_column(&headers, &cfg.case_start_column)?;
        let end = required_column(&headers, &cfg.case_end_column)?;
        let id_col = column(&headers, &cfg.case_id_column);

        let mut cases = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let id = id_col
                .and_then(|c| cell(&record, c))
                .map(str::to_string)
                .unwrap_or_else(|| (i + 1).to_string());

            cases.push(WorkCase {
                start: timestamp_cell(&record, start, &id, &cfg.case_start_column)?,
                end: timestamp_cell(&record, end, &id, &cfg.case_end_column)?,
                id,
            });
        }

        Ok(cases)
    }
}

/// Parses a working flag as spreadsheets and humans write it.
pub fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn required_column(headers: &StringRecord, name: &str) -> AppResult<usize> {
    column(headers, name).ok_or_else(|| AppError::MissingColumn(name.to_string()))
}

/// Non-blank cell at `idx`.
fn cell(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).filter(|v| !v.is_empty())
}

fn timestamp_cell(
    record: &StringRecord,
    idx: usize,
    id: &str,
    column: &str,
) -> AppResult<chrono::NaiveDateTime> {
    let raw = cell(record, idx).ok_or_else(|| AppError::MissingRequiredField {
        row: format!("case {id}"),
        field: column.to_string(),
    })?;
    parse_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp(format!("case {id}: {raw}")))
}
