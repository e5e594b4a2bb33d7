mod common;

use common::setup_test_data;
use rattendance::core::clock::FixedClock;
use rattendance::core::roster::{self, ROSTER};
use rattendance::core::session::{ClearOutcome, ScanOutcome, ScanState, Session};
use rattendance::core::store::AttendanceStore;
use rattendance::errors::AppError;
use std::fs;
use std::path::Path;
use std::time::Duration;

fn session_at(data: &str, clock: FixedClock) -> Session<FixedClock> {
    Session::new(AttendanceStore::open(data), clock, Duration::ZERO)
}

fn morning() -> FixedClock {
    FixedClock::at_civil(2024, 3, 1, 9, 15, 30).expect("valid time")
}

#[test]
fn test_scan_without_selection_leaves_store_untouched() {
    let data = setup_test_data("session_no_user");
    let mut session = session_at(&data, morning());

    let outcome = session.scan().unwrap();

    assert_eq!(outcome, ScanOutcome::NoUserSelected);
    assert_eq!(session.state(), ScanState::NoUserSelected);
    assert!(session.records().is_empty());
    // persist never ran
    assert!(!Path::new(&data).exists());
}

#[test]
fn test_scan_records_selected_user_and_resets_selection() {
    let data = setup_test_data("session_scan_amr");
    let mut session = session_at(&data, morning());

    assert_eq!(session.select("amr").unwrap(), "Amr");
    let mut started = None;
    let outcome = session
        .scan_with(|name| started = Some(name.to_string()))
        .unwrap();

    let ScanOutcome::Recorded(r) = outcome else {
        panic!("expected a record");
    };
    assert_eq!(started.as_deref(), Some("Amr"));
    assert_eq!(r.name, "Amr");
    assert_eq!(r.date, "2024-03-01");
    assert_eq!(r.date_display.as_deref(), Some("01/03/2024"));
    assert_eq!(r.time.as_deref(), Some("09:15:30 AM"));
    assert_eq!(r.time_24.as_deref(), Some("09:15:30"));
    assert_eq!(r.epoch_seconds(), 1_709_277_330.0);

    assert_eq!(session.state(), ScanState::Recorded);
    assert_eq!(session.selected_user(), None);
    assert_eq!(session.store().len(), 1);

    let bytes = session.export_spreadsheet().unwrap().expect("workbook");
    assert!(!bytes.is_empty());
}

#[test]
fn test_second_scan_needs_a_new_selection() {
    let data = setup_test_data("session_reselect");
    let mut session = session_at(&data, morning());

    session.select("Rana").unwrap();
    session.scan().unwrap();
    assert_eq!(session.scan().unwrap(), ScanOutcome::NoUserSelected);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_two_scans_are_stored_newest_first() {
    let data = setup_test_data("session_order");
    let mut session = session_at(&data, morning());

    session.select("Amr").unwrap();
    session.scan().unwrap();
    session.select("Rana").unwrap();
    session.scan().unwrap();

    let reopened = AttendanceStore::open_strict(&data).unwrap();
    let names: Vec<_> = reopened.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Rana", "Amr"]);
}

#[test]
fn test_unknown_user_is_rejected() {
    let data = setup_test_data("session_unknown");
    let mut session = session_at(&data, morning());

    assert!(matches!(session.select("Zed"), Err(AppError::UnknownUser(_))));
    assert!(matches!(session.select("0"), Err(AppError::UnknownUser(_))));
    assert!(matches!(session.select("7"), Err(AppError::UnknownUser(_))));
    assert_eq!(session.selected_user(), None);
}

#[test]
fn test_roster_accepts_index_and_any_case() {
    assert_eq!(roster::resolve("1").unwrap(), ROSTER[0]);
    assert_eq!(roster::resolve(" 6 ").unwrap(), "Asmaa");
    assert_eq!(roster::resolve("FARIDA").unwrap(), "Farida");
}

#[test]
fn test_clear_on_full_and_empty_log() {
    let data = setup_test_data("session_clear");
    let mut session = session_at(&data, morning());

    assert_eq!(session.clear().unwrap(), ClearOutcome::AlreadyEmpty);

    for name in ["Amr", "Rana", "Farida", "Hadel", "Fatma"] {
        session.select(name).unwrap();
        session.scan().unwrap();
    }
    assert_eq!(session.clear().unwrap(), ClearOutcome::Cleared(5));
    assert!(session.records().is_empty());
    assert_eq!(fs::read_to_string(&data).unwrap().trim(), "[]");

    assert!(AttendanceStore::open(&data).is_empty());
    assert!(session.export_spreadsheet().unwrap().is_none());
}

#[test]
fn test_welcome_only_once_and_only_when_empty() {
    let data = setup_test_data("session_welcome");
    let mut session = session_at(&data, morning());
    assert!(session.take_welcome());
    assert!(!session.take_welcome());

    session.select("Hadel").unwrap();
    session.scan().unwrap();

    let mut again = session_at(&data, morning());
    assert!(!again.take_welcome());
}

#[test]
fn test_scan_waits_for_the_delay() {
    let data = setup_test_data("session_delay");
    let mut session = Session::new(
        AttendanceStore::open(&data),
        morning(),
        Duration::from_millis(50),
    );
    session.select("Fatma").unwrap();

    let started = std::time::Instant::now();
    session.scan().unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_retry_after_write_failure_keeps_memory_in_sync() {
    let blocker = setup_test_data("session_write_fails");
    fs::write(&blocker, "x").unwrap();
    let data = Path::new(&blocker).join("attendance.json");

    let mut session = Session::new(AttendanceStore::open(&data), morning(), Duration::ZERO);
    session.select("Amr").unwrap();

    assert!(matches!(session.scan(), Err(AppError::Io(_))));
    assert!(matches!(session.scan(), Err(AppError::Io(_))));

    assert_eq!(session.records().len(), 0);
    assert_eq!(session.state(), ScanState::Idle);
    // selection survives so the scan can be retried once storage is fixed
    assert_eq!(session.selected_user(), Some("Amr"));
}
