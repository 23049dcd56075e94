use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Current local wall-clock instant. Read once at the edge of a command
/// and passed down; the resolvers never call this themselves.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse an instant given on the command line (`--at`).
pub fn parse_instant(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    INSTANT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Build a date, clamping `day` to the last day of the month
/// (31 in April gives April 30, 29 in a non-leap February gives the 28th).
pub fn ymd_clamped(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// First day of the month following `d`, rolling December into January.
pub fn first_of_next_month(d: NaiveDate) -> AppResult<NaiveDate> {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    ymd_clamped(y, m, 1)
}

pub fn format_instant(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// "domingo 2024-03-10 19:00" style label used by the CLI.
pub fn format_instant_long(dt: &NaiveDateTime) -> String {
    let wd = crate::models::weekday::WeekdayName::from_chrono(dt.weekday());
    format!("{} {}", wd.es_name(), format_instant(dt))
}
