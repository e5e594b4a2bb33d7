mod common;

use common::{record_at, setup_test_data};
use rattendance::core::store::{self, AttendanceStore};
use rattendance::errors::{AppError, ReadError};
use std::fs;
use std::path::Path;

#[test]
fn test_missing_file_loads_empty() {
    let data = setup_test_data("store_missing");

    let store = AttendanceStore::open(&data);
    assert!(store.is_empty());
    assert!(matches!(store.load_error(), Some(ReadError::Missing(_))));
    assert!(store::load(Path::new(&data)).is_empty());
}

#[test]
fn test_malformed_file_falls_back_to_empty() {
    let data = setup_test_data("store_malformed");
    fs::write(&data, "{ this is not a list").unwrap();

    let store = AttendanceStore::open(&data);
    assert!(store.is_empty());
    assert!(matches!(store.load_error(), Some(ReadError::Malformed(_))));

    assert!(AttendanceStore::open_strict(&data).is_err());
}

#[test]
fn test_append_is_newest_first_and_persisted() {
    let data = setup_test_data("store_newest_first");
    let mut store = AttendanceStore::open(&data);

    store
        .append(record_at("Amr", 2024, 3, 1, 9, 15, 30))
        .unwrap();
    store
        .append(record_at("Rana", 2024, 3, 1, 9, 20, 0))
        .unwrap();

    let names: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Rana", "Amr"]);

    let reloaded = AttendanceStore::open_strict(&data).unwrap();
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn test_length_tracks_scans_and_clears() {
    let data = setup_test_data("store_length");
    let mut store = AttendanceStore::open(&data);

    for i in 0..3 {
        store
            .append(record_at("Farida", 2024, 5, 1, 8, i, 0))
            .unwrap();
    }
    assert_eq!(store.len(), 3);

    assert_eq!(store.clear().unwrap(), 3);
    assert_eq!(store.len(), 0);

    store
        .append(record_at("Hadel", 2024, 5, 2, 8, 0, 0))
        .unwrap();
    assert_eq!(AttendanceStore::open_strict(&data).unwrap().len(), 1);
}

#[test]
fn test_clear_writes_empty_array() {
    let data = setup_test_data("store_clear");
    let mut store = AttendanceStore::open(&data);
    for i in 0..5 {
        store
            .append(record_at("Asmaa", 2024, 6, 10, 9, i, 0))
            .unwrap();
    }

    store.clear().unwrap();

    assert_eq!(fs::read_to_string(&data).unwrap().trim(), "[]");
    let reopened = AttendanceStore::open(&data);
    assert!(reopened.is_empty());
    assert!(reopened.load_error().is_none());
}

#[test]
fn test_rewrite_is_byte_stable_with_non_ascii() {
    let data = setup_test_data("store_roundtrip");
    let mut store = AttendanceStore::open(&data);
    store
        .append(record_at("عمرو", 2024, 3, 1, 9, 15, 30))
        .unwrap();
    store
        .append(record_at("Fatma", 2024, 3, 2, 16, 45, 5))
        .unwrap();

    let first = fs::read(&data).unwrap();
    let text = String::from_utf8(first.clone()).unwrap();
    assert!(text.contains("عمرو"));
    assert!(!text.contains("\\u"));

    let reloaded = AttendanceStore::open_strict(&data).unwrap();
    reloaded.persist().unwrap();

    assert_eq!(fs::read(&data).unwrap(), first);
}

#[test]
fn test_file_layout_keys_and_indent() {
    let data = setup_test_data("store_layout");
    let mut store = AttendanceStore::open(&data);
    store
        .append(record_at("Amr", 2024, 3, 1, 9, 15, 30))
        .unwrap();

    let text = fs::read_to_string(&data).unwrap();
    let keys = [
        "\"name\":",
        "\"date\":",
        "\"time\":",
        "\"time_24\":",
        "\"date_arabic\":",
        "\"timestamp\":",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(text.contains("\n    \"name\": \"Amr\""));
    assert!(text.contains("\"date_arabic\": \"01/03/2024\""));
    assert!(text.contains("\"time\": \"09:15:30 AM\""));
}

#[test]
fn test_write_failure_is_returned() {
    let blocker = setup_test_data("store_blocker");
    fs::write(&blocker, "x").unwrap();
    let data = Path::new(&blocker).join("attendance.json");

    let mut store = AttendanceStore::open(&data);
    let res = store.append(record_at("Amr", 2024, 3, 1, 9, 0, 0));

    assert!(matches!(res, Err(AppError::Io(_))));
}

#[test]
fn test_statistics() {
    let data = setup_test_data("store_stats");
    let mut store = AttendanceStore::open(&data);
    store.append(record_at("Amr", 2024, 3, 1, 9, 0, 0)).unwrap();
    store.append(record_at("Rana", 2024, 3, 2, 9, 0, 0)).unwrap();
    store.append(record_at("Amr", 2024, 3, 2, 10, 0, 0)).unwrap();

    assert_eq!(store.count_on("2024-03-02"), 2);
    assert_eq!(store.count_on("2024-03-03"), 0);
    assert_eq!(store.distinct_people(), 2);
    assert_eq!(store.recent(2).len(), 2);
    assert_eq!(store.recent(10).len(), 3);
}

#[test]
fn test_legacy_record_without_display_fields() {
    let data = setup_test_data("store_legacy");
    fs::write(
        &data,
        r#"[{"name":"Rana","date":"2024-01-05","time_24":"08:00:00","timestamp":1704434400.0}]"#,
    )
    .unwrap();

    let store = AttendanceStore::open_strict(&data).unwrap();
    let r = &store.records()[0];
    assert_eq!(r.shown_date(), "2024-01-05");
    assert_eq!(r.shown_time(), "08:00:00");
}

const LEGACY_FILE: &str = r#"[
  {
    "name": "Rana",
    "date": "2024-01-05",
    "time_24": "08:00:00",
    "timestamp": 1704434400
  }
]"#;

#[test]
fn test_legacy_entry_survives_rewrite_unchanged() {
    let data = setup_test_data("store_legacy_rewrite");
    fs::write(&data, LEGACY_FILE).unwrap();

    let store = AttendanceStore::open_strict(&data).unwrap();
    store.persist().unwrap();
    assert_eq!(fs::read_to_string(&data).unwrap(), LEGACY_FILE);

    let mut store = AttendanceStore::open_strict(&data).unwrap();
    store
        .append(record_at("Amr", 2024, 3, 1, 9, 15, 30))
        .unwrap();

    let text = fs::read_to_string(&data).unwrap();
    let legacy_object = LEGACY_FILE.strip_prefix("[\n").unwrap();
    assert!(text.ends_with(legacy_object));
    assert!(!text.contains("\"time\": \"\""));
    assert!(!text.contains("\"date_arabic\": \"\""));
    assert!(!text.contains("1704434400.0"));
}

#[test]
fn test_failed_rename_leaves_no_temp_file_and_no_record() {
    let data = setup_test_data("store_rename_fails");
    fs::create_dir_all(&data).unwrap();
    let tmp = format!("{data}.tmp");
    fs::remove_file(&tmp).ok();

    let mut store = AttendanceStore::open(&data);
    let res = store.append(record_at("Amr", 2024, 3, 1, 9, 0, 0));

    assert!(matches!(res, Err(AppError::Io(_))));
    assert!(store.is_empty());
    assert!(!Path::new(&tmp).exists());
    fs::remove_dir_all(&data).ok();
}

#[test]
fn test_failed_clear_keeps_records() {
    let data = setup_test_data("store_clear_fails");
    fs::remove_dir_all(&data).ok();

    let mut store = AttendanceStore::open(&data);
    store.append(record_at("Amr", 2024, 3, 1, 9, 0, 0)).unwrap();
    store.append(record_at("Rana", 2024, 3, 1, 9, 5, 0)).unwrap();

    // a directory in place of the file makes the rewrite fail
    fs::remove_file(&data).unwrap();
    fs::create_dir(&data).unwrap();

    assert!(store.clear().is_err());
    assert_eq!(store.len(), 2);
    fs::remove_dir_all(&data).ok();
}
