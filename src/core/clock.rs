//! Civil clock: current instant expressed in Cairo/Alexandria time.
//!
//! The host zone is never consulted. We always take UTC and convert through
//! the tz database, so DST rules for `Africa/Cairo` are applied even on a
//! machine configured for another zone.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Zone every attendance timestamp is expressed in.
pub const CIVIL_TZ: Tz = chrono_tz::Africa::Cairo;

/// Source of universal time.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock of the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant (tests, replays).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freeze at a Cairo wall-clock time. `None` when the local time does
    /// not exist or is ambiguous (DST transitions).
    pub fn at_civil(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> Option<Self> {
        CIVIL_TZ
            .with_ymd_and_hms(year, month, day, h, m, s)
            .single()
            .map(|dt| FixedClock(dt.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Converts any [`Clock`] into Cairo civil time.
#[derive(Debug, Clone, Default)]
pub struct CivilClock<C: Clock = SystemClock> {
    source: C,
}

impl<C: Clock> CivilClock<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn now(&self) -> CivilTimestamp {
        CivilTimestamp(self.source.now_utc().with_timezone(&CIVIL_TZ))
    }
}

/// An instant in Cairo civil time with the string forms stored in records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTimestamp(pub DateTime<Tz>);

impl CivilTimestamp {
    /// `YYYY-MM-DD`
    pub fn iso_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `DD/MM/YYYY`
    pub fn display_date(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }

    /// `hh:mm:ss AM`
    pub fn time_12h(&self) -> String {
        self.0.format("%I:%M:%S %p").to_string()
    }

    /// `HH:MM:SS`
    pub fn time_24h(&self) -> String {
        self.0.format("%H:%M:%S").to_string()
    }

    /// Seconds since the Unix epoch, microsecond precision.
    pub fn epoch_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_micros()) / 1_000_000.0
    }

    pub fn rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    pub fn zone_name(&self) -> &'static str {
        CIVIL_TZ.name()
    }
}
