#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn grifo() -> Command {
    cargo_bin_cmd!("grifo")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("grifo_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file for `name` whose journal lives next to it.
/// `body` is appended after the `database:` line.
pub fn write_config(name: &str, body: &str) -> (String, String) {
    let conf = temp_path(name, "conf");
    let db = temp_path(name, "sqlite");
    let yaml = format!("database: {}\n{}", db, body);
    fs::write(&conf, yaml).expect("write config");
    (conf, db)
}

pub const STATION_SHIFTS: &str = r#"shifts:
  - name: Leon
    start: "05:00"
    end: "12:00"
  - name: Tarde
    start: "12:00"
    end: "19:00"
  - name: Buho
    start: "19:00"
    end: "05:00"
"#;

pub fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, mi, 0)
        .expect("valid time")
}
