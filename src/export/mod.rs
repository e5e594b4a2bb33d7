// src/export/mod.rs

pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod range;
pub mod xlsx;

pub use logic::ExportLogic;
pub use model::ExportRow;
pub use xlsx::to_spreadsheet;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// `attendance_log_<date>.<ext>`
    pub fn default_file_name(&self, iso_date: &str) -> String {
        format!("attendance_log_{}.{}", iso_date, self.as_str())
    }
}
