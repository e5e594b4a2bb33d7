//! Session context: the selected person, the loaded log and the clock.
//!
//! One `Session` lives for one interactive run (or one CLI invocation) and is
//! dropped with it; nothing here is process-global.

use crate::core::clock::{CivilClock, CivilTimestamp, Clock, SystemClock};
use crate::core::roster;
use crate::core::store::AttendanceStore;
use crate::errors::AppResult;
use crate::export;
use crate::models::AttendanceRecord;
use std::thread;
use std::time::Duration;

/// Where the scan action stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Recorded,
    NoUserSelected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    NoUserSelected,
    Recorded(AttendanceRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    Cleared(usize),
}

pub struct Session<C: Clock = SystemClock> {
    store: AttendanceStore,
    clock: CivilClock<C>,
    scan_delay: Duration,
    selected_user: Option<&'static str>,
    state: ScanState,
    welcome_shown: bool,
}

impl<C: Clock> Session<C> {
    pub fn new(store: AttendanceStore, clock: C, scan_delay: Duration) -> Self {
        Self {
            store,
            clock: CivilClock::new(clock),
            scan_delay,
            selected_user: None,
            state: ScanState::Idle,
            welcome_shown: false,
        }
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        self.store.records()
    }

    pub fn now(&self) -> CivilTimestamp {
        self.clock.now()
    }

    /// Terminal state of the last scan, `Idle` before the first one.
    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn selected_user(&self) -> Option<&'static str> {
        self.selected_user
    }

    /// Select a roster entry by name or 1-based index.
    pub fn select(&mut self, input: &str) -> AppResult<&'static str> {
        let name = roster::resolve(input)?;
        self.selected_user = Some(name);
        Ok(name)
    }

    pub fn scan(&mut self) -> AppResult<ScanOutcome> {
        self.scan_with(|_| {})
    }

    /// Run the scan action. `on_start` is called with the selected name once
    /// scanning begins, before the delay.
    ///
    /// Without a selection the store is not touched. Otherwise the call
    /// blocks for the scan delay, appends a record stamped after the delay
    /// and clears the selection.
    pub fn scan_with<F: FnOnce(&str)>(&mut self, on_start: F) -> AppResult<ScanOutcome> {
        let Some(name) = self.selected_user else {
            self.state = ScanState::NoUserSelected;
            return Ok(ScanOutcome::NoUserSelected);
        };

        self.state = ScanState::Scanning;
        on_start(name);
        if !self.scan_delay.is_zero() {
            thread::sleep(self.scan_delay);
        }

        let record = AttendanceRecord::new(name, &self.clock.now());
        if let Err(e) = self.store.append(record.clone()) {
            self.state = ScanState::Idle;
            return Err(e);
        }

        self.selected_user = None;
        self.state = ScanState::Recorded;
        Ok(ScanOutcome::Recorded(record))
    }

    pub fn clear(&mut self) -> AppResult<ClearOutcome> {
        if self.store.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }
        Ok(ClearOutcome::Cleared(self.store.clear()?))
    }

    /// Workbook bytes for the current log, `None` when it is empty.
    pub fn export_spreadsheet(&self) -> AppResult<Option<Vec<u8>>> {
        export::to_spreadsheet(self.store.records())
    }

    /// `true` exactly once per session, and only while the log is empty.
    pub fn take_welcome(&mut self) -> bool {
        if self.welcome_shown || !self.store.is_empty() {
            return false;
        }
        self.welcome_shown = true;
        true
    }
}
