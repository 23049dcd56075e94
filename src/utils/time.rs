//! Time-of-day utilities: parsing HH:MM, minutes since midnight, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Minutes since midnight, seconds dropped. Always in 0..1440.
pub fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Inverse of `minutes_of_day`; 1440 and above wrap around.
pub fn time_from_minutes(mins: u32) -> NaiveTime {
    let m = mins % 1440;
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN)
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Serde adapter storing a `NaiveTime` as "HH:MM" in the config file.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_hhmm(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid time '{raw}', expected HH:MM"))
        })
    }
}

/// "2d 05h 45m" style span; days omitted when zero.
pub fn format_span(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    let (days, rest) = (m / 1440, m % 1440);
    if days > 0 {
        format!("{}{}d {:02}h {:02}m", sign, days, rest / 60, rest % 60)
    } else {
        format!("{}{:02}h {:02}m", sign, rest / 60, rest % 60)
    }
}
