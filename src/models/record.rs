use crate::core::clock::CivilTimestamp;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One scan event, as persisted in the attendance file.
///
/// Field order is the on-disk key order. The optional fields are always set
/// on new records; older entries may lack them and are written back without
/// them, so loading and re-saving never alters a stored entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    pub date: String, // YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>, // hh:mm:ss AM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_24: Option<String>, // HH:MM:SS
    #[serde(
        rename = "date_arabic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_display: Option<String>, // DD/MM/YYYY
    /// Kept as read: an integer stays an integer.
    pub timestamp: Number,
}

impl AttendanceRecord {
    /// Build a record for `name` stamped at `at`.
    pub fn new(name: &str, at: &CivilTimestamp) -> Self {
        let timestamp =
            Number::from_f64(at.epoch_seconds()).unwrap_or_else(|| Number::from(at.0.timestamp()));
        Self {
            name: name.to_string(),
            date: at.iso_date(),
            time: Some(at.time_12h()),
            time_24: Some(at.time_24h()),
            date_display: Some(at.display_date()),
            timestamp,
        }
    }

    /// Seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> f64 {
        self.timestamp.as_f64().unwrap_or_default()
    }

    /// Display date, falling back to the ISO date for older entries.
    pub fn shown_date(&self) -> &str {
        self.date_display.as_deref().unwrap_or(&self.date)
    }

    /// Display time, falling back to the 24h clock for older entries.
    pub fn shown_time(&self) -> &str {
        self.time
            .as_deref()
            .or(self.time_24.as_deref())
            .unwrap_or("--:--:--")
    }
}
