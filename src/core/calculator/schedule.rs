//! Next firing instant of a recurring schedule.

use crate::errors::AppResult;
use crate::models::recurrence::{NextOccurrence, RecurrenceSpec};
use crate::utils::date::{first_of_next_month, ymd_clamped};
use chrono::{Datelike, Duration, NaiveDateTime};

/// Next instant after `now` at which `spec` fires.
///
/// The time of day is applied first, rolling to tomorrow once it has
/// passed; the weekday, day or month is then applied to that candidate.
/// A weekly or monthly target equal to the candidate's own weekday/day
/// moves a full week/month ahead.
///
/// Days past the end of the target month are clamped to its last day
/// (day 31 fires on April 30, a yearly Feb 29 fires on Feb 28 in common
/// years). Errors only when the result falls outside chrono's date range.
pub fn next_occurrence(spec: &RecurrenceSpec, now: NaiveDateTime) -> AppResult<NextOccurrence> {
    let at = match spec.time_of_day() {
        Some(at) => at,
        None => return Ok(NextOccurrence::Disabled),
    };

    let mut candidate = now.date().and_time(at);
    if candidate <= now {
        candidate = candidate + Duration::days(1);
    }

    let next = match *spec {
        RecurrenceSpec::Disabled => return Ok(NextOccurrence::Disabled),

        RecurrenceSpec::Daily { .. } => candidate,

        RecurrenceSpec::Weekly { weekday, .. } => {
            let current = candidate.weekday().num_days_from_sunday() as i64;
            let mut distance = weekday.ordinal() as i64 - current;
            if distance <= 0 {
                distance += 7;
            }
            candidate + Duration::days(distance)
        }

        RecurrenceSpec::Monthly { day, .. } => {
            let mut date = candidate.date();
            if day.get() <= date.day() {
                date = first_of_next_month(date)?;
            }
            ymd_clamped(date.year(), date.month(), day.get())?.and_time(at)
        }

        RecurrenceSpec::Yearly { month, day, .. } => {
            let year = candidate.year();
            let this_year = ymd_clamped(year, month.number(), day.get())?.and_time(at);
            if this_year > now {
                this_year
            } else {
                ymd_clamped(year + 1, month.number(), day.get())?.and_time(at)
            }
        }
    };

    debug_assert!(next > now, "schedule '{spec}' resolved to {next}");

    Ok(NextOccurrence::At(next))
}

/// The next `count` firings, each resolved from the previous one.
pub fn upcoming(
    spec: &RecurrenceSpec,
    now: NaiveDateTime,
    count: usize,
) -> AppResult<Vec<NaiveDateTime>> {
    let mut out = Vec::with_capacity(count);
    let mut cursor = now;

    for _ in 0..count {
        match next_occurrence(spec, cursor)? {
            NextOccurrence::At(dt) => {
                out.push(dt);
                cursor = dt;
            }
            NextOccurrence::Disabled => break,
        }
    }

    Ok(out)
}
