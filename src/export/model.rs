// src/export/model.rs

use crate::models::AttendanceRecord;
use serde::Serialize;

/// Worksheet name ("attendance log").
pub const SHEET_NAME: &str = "سجل الحضور";

/// Column headers: name, date, time, timestamp.
pub const HEADERS: [&str; 4] = ["الاسم", "التاريخ", "الوقت", "الطابع الزمني"];

/// Column widths, same order as [`HEADERS`].
pub const COLUMN_WIDTHS: [f64; 4] = [15.0, 15.0, 15.0, 20.0];

/// Flat row shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ExportRow {
    pub name: String,
    pub date: String,
    pub time: String,
    pub timestamp: f64,
}

impl From<&AttendanceRecord> for ExportRow {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            name: r.name.clone(),
            date: r.date.clone(),
            time: r.shown_time().to_string(),
            timestamp: r.epoch_seconds(),
        }
    }
}

pub(crate) fn to_rows(records: &[AttendanceRecord]) -> Vec<ExportRow> {
    records.iter().map(ExportRow::from).collect()
}
