// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{COLUMN_WIDTHS, HEADERS, SHEET_NAME, to_rows};
use crate::export::notify_export_success;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::fs;
use std::path::Path;

const HEADER_FILL: u32 = 0x667EEA;

/// Render `records` as a single-sheet workbook.
///
/// Returns `None` for an empty log: there is nothing to export.
pub fn to_spreadsheet(records: &[AttendanceRecord]) -> AppResult<Option<Vec<u8>>> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(to_app_error)?;
    }

    // ---------------------------
    // Rows, in log order
    // ---------------------------
    for (i, row) in to_rows(records).iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write(r, 0, row.name.as_str()).map_err(to_app_error)?;
        worksheet.write(r, 1, row.date.as_str()).map_err(to_app_error)?;
        worksheet.write(r, 2, row.time.as_str()).map_err(to_app_error)?;
        worksheet.write(r, 3, row.timestamp).map_err(to_app_error)?;
    }

    let bytes = workbook.save_to_buffer().map_err(to_app_error)?;
    Ok(Some(bytes))
}

/// Write the workbook for `records` to `path`.
pub(crate) fn export_xlsx(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let bytes = to_spreadsheet(records)?
        .ok_or_else(|| AppError::Export("no records to export".to_string()))?;
    fs::write(path, bytes)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
