use chrono::{Duration, NaiveTime};
use grifo::core::calculator::shift::{coverage, resolve_window, windows_at_minute};
use grifo::errors::AppError;
use grifo::models::window::{NamedWindow, WindowTable};

mod common;
use common::dt;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn station() -> WindowTable {
    WindowTable::new(vec![
        NamedWindow::new("Leon", hm(5, 0), hm(12, 0)),
        NamedWindow::new("Tarde", hm(12, 0), hm(19, 0)),
        NamedWindow::new("Buho", hm(19, 0), hm(5, 0)),
    ])
    .expect("valid table")
}

#[test]
fn test_end_to_end_night_shift() {
    let r = resolve_window(&station(), dt(2024, 3, 10, 21, 15));

    assert_eq!(r.name, "Buho");
    assert_eq!(r.from, dt(2024, 3, 10, 19, 0));
    assert_eq!(r.to, dt(2024, 3, 11, 5, 0));
    assert!(!r.fallback);
}

#[test]
fn test_wrapping_window_late_night_head() {
    let r = resolve_window(&station(), dt(2024, 3, 10, 23, 30));

    assert_eq!(r.name, "Buho");
    assert_eq!(r.from, dt(2024, 3, 10, 19, 0));
    assert_eq!(r.to, dt(2024, 3, 11, 5, 0));
}

#[test]
fn test_wrapping_window_early_morning_tail() {
    let r = resolve_window(&station(), dt(2024, 3, 11, 2, 0));

    assert_eq!(r.name, "Buho");
    assert_eq!(r.from, dt(2024, 3, 10, 19, 0));
    assert_eq!(r.to, dt(2024, 3, 11, 5, 0));
}

#[test]
fn test_wrap_across_month_and_year_end() {
    let r = resolve_window(&station(), dt(2025, 1, 1, 0, 30));
    assert_eq!(r.from, dt(2024, 12, 31, 19, 0));
    assert_eq!(r.to, dt(2025, 1, 1, 5, 0));

    let r = resolve_window(&station(), dt(2024, 2, 29, 20, 0));
    assert_eq!(r.to, dt(2024, 3, 1, 5, 0));
}

#[test]
fn test_start_inclusive_end_exclusive() {
    let table = station();

    let at_start = resolve_window(&table, dt(2024, 3, 10, 5, 0));
    assert_eq!(at_start.name, "Leon");
    assert_eq!(at_start.from, dt(2024, 3, 10, 5, 0));
    assert_eq!(at_start.to, dt(2024, 3, 10, 12, 0));

    let at_end = resolve_window(&table, dt(2024, 3, 10, 12, 0));
    assert_eq!(at_end.name, "Tarde");

    let just_before = resolve_window(&table, dt(2024, 3, 10, 4, 59));
    assert_eq!(just_before.name, "Buho");
}

#[test]
fn test_seconds_do_not_change_membership() {
    let now = dt(2024, 3, 10, 11, 59) + Duration::seconds(59);
    let r = resolve_window(&station(), now);

    assert_eq!(r.name, "Leon");
    assert!(r.contains(&now));
}

#[test]
fn test_tiling_table_matches_exactly_one_window_every_minute() {
    let table = station();
    let midnight = dt(2024, 3, 10, 0, 0);

    for minute in 0..1440u32 {
        let hits = windows_at_minute(&table, minute);
        assert_eq!(hits.len(), 1, "minute {} matched {} windows", minute, hits.len());

        let now = midnight + Duration::minutes(minute as i64);
        let r = resolve_window(&table, now);
        assert_eq!(r.name, hits[0].name);
        assert!(!r.fallback);
        assert!(r.contains(&now), "{} not inside {:?}", now, r);
    }
}

#[test]
fn test_overlapping_windows_first_listed_wins() {
    let table = WindowTable::new(vec![
        NamedWindow::new("Early", hm(8, 0), hm(16, 0)),
        NamedWindow::new("Late", hm(10, 0), hm(18, 0)),
    ])
    .unwrap();

    assert_eq!(resolve_window(&table, dt(2024, 3, 10, 11, 0)).name, "Early");
    assert_eq!(resolve_window(&table, dt(2024, 3, 10, 17, 0)).name, "Late");
}

#[test]
fn test_gap_falls_back_to_first_window() {
    let table = WindowTable::new(vec![
        NamedWindow::new("Day", hm(8, 0), hm(17, 0)),
        NamedWindow::new("Evening", hm(17, 0), hm(22, 0)),
    ])
    .unwrap();

    let r = resolve_window(&table, dt(2024, 3, 10, 23, 0));

    assert!(r.fallback);
    assert_eq!(r.name, "Day");
    assert_eq!(r.from, dt(2024, 3, 10, 8, 0));
    assert_eq!(r.to, dt(2024, 3, 10, 17, 0));
}

#[test]
fn test_wrapping_fallback_ends_after_it_starts() {
    let table = WindowTable::new(vec![
        NamedWindow::new("Night", hm(22, 0), hm(6, 0)),
        NamedWindow::new("Morning", hm(8, 0), hm(12, 0)),
    ])
    .unwrap();

    let r = resolve_window(&table, dt(2024, 3, 10, 7, 0));

    assert!(r.fallback);
    assert_eq!(r.name, "Night");
    assert_eq!(r.from, dt(2024, 3, 10, 22, 0));
    assert_eq!(r.to, dt(2024, 3, 11, 6, 0));
}

#[test]
fn test_empty_table_is_a_configuration_error() {
    let err = WindowTable::new(vec![]).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_duplicate_shift_names_rejected() {
    let err = WindowTable::new(vec![
        NamedWindow::new("Leon", hm(5, 0), hm(12, 0)),
        NamedWindow::new("Leon", hm(12, 0), hm(5, 0)),
    ])
    .unwrap_err();

    assert!(err.to_string().contains("duplicate shift name 'Leon'"));
}

#[test]
fn test_default_table_is_the_station_table() {
    let table = WindowTable::default();
    let by_name = |name: &str| table.windows().iter().find(|w| w.name == name);

    assert_eq!(table, station());
    assert!(by_name("Buho").is_some_and(NamedWindow::wraps));
    assert_eq!(by_name("Tarde").map(NamedWindow::duration_minutes), Some(420));
    assert_eq!(by_name("Buho").map(NamedWindow::duration_minutes), Some(600));
}

#[test]
fn test_coverage_of_station_table_tiles_day() {
    let report = coverage(&station());
    assert!(report.tiles_day(), "{:?}", report);
}

#[test]
fn test_coverage_reports_gap_across_midnight_and_overlaps() {
    let table = WindowTable::new(vec![
        NamedWindow::new("Leon", hm(5, 0), hm(12, 0)),
        NamedWindow::new("Tarde", hm(11, 0), hm(19, 0)),
    ])
    .unwrap();

    let report = coverage(&table);

    assert_eq!(report.gaps, vec![(hm(19, 0), hm(5, 0))]);
    assert_eq!(report.overlaps, vec![("Leon".to_string(), "Tarde".to_string())]);
    assert!(!report.tiles_day());
}

#[test]
fn test_coverage_reports_gap_inside_day() {
    let table = WindowTable::new(vec![
        NamedWindow::new("Night", hm(20, 0), hm(8, 0)),
        NamedWindow::new("Day", hm(9, 0), hm(20, 0)),
    ])
    .unwrap();

    assert_eq!(coverage(&table).gaps, vec![(hm(8, 0), hm(9, 0))]);
}
