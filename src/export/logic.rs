use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ResultExport};
use crate::models::CaseResult;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Writes batch results to `file` in the requested format.
    pub fn export(results: &[CaseResult], format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows: Vec<ResultExport> = results.iter().map(ResultExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &path),
            ExportFormat::Xlsx => export_xlsx(&rows, &path),
        }
    }
}
