// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::{filter_records, parse_range};
use crate::export::xlsx::export_xlsx;
use crate::models::AttendanceRecord;
use crate::ui::messages::error;
use std::path::Path;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `records` to `path`.
    ///
    /// - `range`: `None`, `"all"` or an expression accepted by
    ///   [`parse_range`]
    ///
    /// Returns the number of rows written; `0` means no record matched and
    /// no file was produced.
    pub fn export(
        records: &[AttendanceRecord],
        format: ExportFormat,
        path: &Path,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let selected = match range {
            None => records.to_vec(),
            Some(r) if r.eq_ignore_ascii_case("all") => records.to_vec(),
            Some(r) => filter_records(records, parse_range(r)?),
        };

        if selected.is_empty() {
            error("No attendance data to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(&selected, path)?,
            ExportFormat::Csv => export_csv(&selected, path)?,
            ExportFormat::Json => export_json(&selected, path)?,
        }

        Ok(selected.len())
    }
}
