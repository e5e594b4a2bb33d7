//! Internal operation journal, one JSON object per line.

use crate::core::clock::{CivilClock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the journal at `path`.
pub fn write(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let entry = JournalEntry {
        date: CivilClock::<SystemClock>::default().now().rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// Journal write that never fails the calling action.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = write(path, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// All journal entries in write order. Lines that do not parse are skipped.
pub fn read_entries(path: &Path) -> AppResult<Vec<JournalEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(fs::File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(e) = serde_json::from_str::<JournalEntry>(&line) {
            entries.push(e);
        }
    }
    Ok(entries)
}
