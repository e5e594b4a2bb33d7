//! Attendance store: a flat JSON array, newest record first.
//!
//! Every mutation rewrites the whole file. Reads that fail for any reason
//! start from an empty log; writes that fail are returned to the caller.

use crate::errors::{AppResult, ReadError};
use crate::models::AttendanceRecord;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct AttendanceStore {
    path: PathBuf,
    records: Vec<AttendanceRecord>,
    load_error: Option<ReadError>,
}

impl AttendanceStore {
    /// Open the store at `path`, starting empty if the file is missing,
    /// unreadable or malformed. The reason is kept in [`Self::load_error`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match read_records(&path) {
            Ok(records) => Self {
                path,
                records,
                load_error: None,
            },
            Err(e) => Self {
                path,
                records: Vec::new(),
                load_error: Some(e),
            },
        }
    }

    /// Open the store, failing on any read problem.
    pub fn open_strict(path: impl Into<PathBuf>) -> Result<Self, ReadError> {
        let path = path.into();
        let records = read_records(&path)?;
        Ok(Self {
            path,
            records,
            load_error: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why the last open fell back to an empty log, if it did.
    pub fn load_error(&self) -> Option<&ReadError> {
        self.load_error.as_ref()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert at the front and rewrite the file.
    ///
    /// On a write failure the record is dropped again, so memory never holds
    /// anything the file does not.
    pub fn append(&mut self, record: AttendanceRecord) -> AppResult<()> {
        self.records.insert(0, record);
        if let Err(e) = self.persist() {
            self.records.remove(0);
            return Err(e);
        }
        Ok(())
    }

    /// Drop every record and rewrite the file as `[]`. Returns how many
    /// records were removed. On a write failure the records are kept.
    pub fn clear(&mut self) -> AppResult<usize> {
        let previous = std::mem::take(&mut self.records);
        if let Err(e) = self.persist() {
            self.records = previous;
            return Err(e);
        }
        Ok(previous.len())
    }

    pub fn persist(&self) -> AppResult<()> {
        write_records(&self.path, &self.records)
    }

    /// The `n` most recent records.
    pub fn recent(&self, n: usize) -> &[AttendanceRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Number of records dated `iso_date` (YYYY-MM-DD).
    pub fn count_on(&self, iso_date: &str) -> usize {
        self.records.iter().filter(|r| r.date == iso_date).count()
    }

    /// Number of distinct people with at least one record.
    pub fn distinct_people(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Read the full list from `path`.
pub fn read_records(path: &Path) -> Result<Vec<AttendanceRecord>, ReadError> {
    if !path.exists() {
        return Err(ReadError::Missing(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Like [`read_records`] but any failure yields an empty list.
pub fn load(path: &Path) -> Vec<AttendanceRecord> {
    read_records(path).unwrap_or_default()
}

/// Serialize `records` and replace the file at `path` in one rename.
pub fn write_records(path: &Path, records: &[AttendanceRecord]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let replaced = fs::write(&tmp, json.as_bytes()).and_then(|_| fs::rename(&tmp, path));
    if let Err(e) = replaced {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
