//! Unified application error type.
//! The core (normalizer, calculator) and the surrounding CLI all return
//! AppError so failures surface to the caller in one shape.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Core contract violations
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field '{field}' in {row}")]
    MissingRequiredField { row: String, field: String },

    #[error("Invalid time format in {row}, column '{column}': {value:?}")]
    InvalidTimeFormat {
        row: String,
        column: String,
        value: String,
    },

    #[error("Ambiguous schedule: {date} appears more than once ({})", .rows.join(", "))]
    AmbiguousSchedule { date: NaiveDate, rows: Vec<String> },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid working flag in {row}: {value:?}")]
    InvalidFlag { row: String, value: String },

    #[error("Missing column in header: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
