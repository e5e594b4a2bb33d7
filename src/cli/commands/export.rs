use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{CivilClock, SystemClock};
use crate::core::journal;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::AttendanceRecord;
use std::path::{Path, PathBuf};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = open_store(cfg);
        let path = output_path(*format, file.as_deref());
        run_export(store.records(), *format, &path, range, *force, cfg)?;
    }
    Ok(())
}

/// Explicit path, or `attendance_log_<today>.<ext>` in the working directory.
pub(crate) fn output_path(format: ExportFormat, file: Option<&str>) -> PathBuf {
    match file {
        Some(f) => crate::config::expand_tilde(f),
        None => {
            let today = CivilClock::new(SystemClock).now().iso_date();
            PathBuf::from(format.default_file_name(&today))
        }
    }
}

pub(crate) fn run_export(
    records: &[AttendanceRecord],
    format: ExportFormat,
    path: &Path,
    range: &Option<String>,
    force: bool,
    cfg: &Config,
) -> AppResult<()> {
    let written = ExportLogic::export(records, format, path, range, force)?;
    if written > 0 {
        journal::ttlog(
            &cfg.journal_path(),
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} as {}{}",
                written,
                format.as_str(),
                range
                    .as_ref()
                    .map(|r| format!(" (range {r})"))
                    .unwrap_or_default()
            ),
        );
    }
    Ok(())
}
