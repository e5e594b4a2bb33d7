pub mod backup;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod now;
pub mod roster;
pub mod scan;
pub mod session;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::journal;
use crate::core::session::Session;
use crate::core::store::AttendanceStore;
use crate::errors::ReadError;
use std::time::Duration;

/// Open the configured log, journaling why it started empty if it had to.
pub(crate) fn open_store(cfg: &Config) -> AttendanceStore {
    let store = AttendanceStore::open(cfg.data_path());
    match store.load_error() {
        None | Some(ReadError::Missing(_)) => {}
        Some(e) => journal::ttlog(
            &cfg.journal_path(),
            "load_fallback",
            &store.path().to_string_lossy(),
            &e.to_string(),
        ),
    }
    store
}

/// Build a session over the configured log.
pub(crate) fn open_session(cfg: &Config, delay_ms: Option<u64>) -> Session<SystemClock> {
    let delay = Duration::from_millis(delay_ms.unwrap_or(cfg.scan_delay_ms));
    Session::new(open_store(cfg), SystemClock, delay)
}
