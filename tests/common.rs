#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::core::clock::{CivilClock, FixedClock};
use rattendance::models::AttendanceRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rta() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique data file path inside the system temp dir; any previous file and
/// journal are removed.
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.json", name));
    fs::remove_file(&path).ok();
    fs::remove_file(journal_for(&path.to_string_lossy())).ok();
    path.to_string_lossy().to_string()
}

/// Journal path the CLI derives for a `--data` file.
pub fn journal_for(data: &str) -> PathBuf {
    let p = PathBuf::from(data);
    let stem = p.file_stem().unwrap().to_string_lossy().to_string();
    p.with_file_name(format!("{stem}.journal.jsonl"))
}

/// Temporary output file path, removed if it already exists.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Record for `name` stamped at a Cairo wall-clock time.
pub fn record_at(name: &str, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> AttendanceRecord {
    let clock = FixedClock::at_civil(y, mo, d, h, mi, s).expect("valid civil time");
    AttendanceRecord::new(name, &CivilClock::new(clock).now())
}

/// Scan `name` through the CLI with no simulated delay.
pub fn scan(data: &str, name: &str) {
    rta()
        .args(["--test", "--data", data, "scan", name, "--delay-ms", "0"])
        .assert()
        .success();
}

pub fn read_records(data: &str) -> Vec<AttendanceRecord> {
    let content = fs::read_to_string(data).expect("read data file");
    serde_json::from_str(&content).expect("parse data file")
}
