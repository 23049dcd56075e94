//! Shift-window resolution: which named window contains an instant, and
//! the concrete [from, to) of that occurrence.

use crate::models::window::{NamedWindow, ResolvedWindow, WindowTable};
use crate::utils::time::{minutes_of_day, time_from_minutes};
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Resolve the shift containing `now`.
///
/// The first window (in table order) whose [start, end) contains the
/// minute-of-day of `now` wins. If none does, the table's fallback entry
/// (its first window) is returned with `fallback = true`; a table that
/// tiles the day never takes that path.
pub fn resolve_window(table: &WindowTable, now: NaiveDateTime) -> ResolvedWindow {
    let t = minutes_of_day(now.time());

    match table.windows().iter().find(|w| w.contains_minute(t)) {
        Some(w) => anchor(w, now, false),
        None => anchor(table.fallback(), now, true),
    }
}

/// All windows containing the given minute of day, in table order.
pub fn windows_at_minute(table: &WindowTable, minute: u32) -> Vec<&NamedWindow> {
    table
        .windows()
        .iter()
        .filter(|w| w.contains_minute(minute))
        .collect()
}

fn anchor(w: &NamedWindow, now: NaiveDateTime, fallback: bool) -> ResolvedWindow {
    let t = minutes_of_day(now.time());
    let (s, e) = (w.start_minute(), w.end_minute());
    let today = now.date();

    let mut from = today.and_time(time_from_minutes(s));
    let mut to = today.and_time(time_from_minutes(e));

    if s > e {
        if t < e {
            // early-morning tail of a window that started yesterday
            from = from - Duration::days(1);
        } else {
            // late-night head, or a fallback outside the window:
            // both end tomorrow
            to = to + Duration::days(1);
        }
    }

    ResolvedWindow {
        name: w.name.clone(),
        from,
        to,
        fallback,
    }
}

/// How a shift table covers the 24 hours of a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Uncovered [from, to) ranges. A range may wrap midnight.
    pub gaps: Vec<(NaiveTime, NaiveTime)>,
    /// Pairs of shift names sharing at least one minute.
    pub overlaps: Vec<(String, String)>,
}

impl Coverage {
    /// Every minute belongs to exactly one shift.
    pub fn tiles_day(&self) -> bool {
        self.gaps.is_empty() && self.overlaps.is_empty()
    }
}

pub fn coverage(table: &WindowTable) -> Coverage {
    let windows = table.windows();

    let mut runs: Vec<(u32, u32)> = Vec::new();
    let mut run_start: Option<u32> = None;
    for minute in 0..1440 {
        let covered = windows.iter().any(|w| w.contains_minute(minute));
        match (covered, run_start) {
            (false, None) => run_start = Some(minute),
            (true, Some(start)) => {
                runs.push((start, minute));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        runs.push((start, 1440));
    }

    // A gap touching both ends of the day is a single gap across midnight.
    if runs.len() > 1 && runs[0].0 == 0 && runs[runs.len() - 1].1 == 1440 {
        let head = runs.remove(0);
        if let Some(last) = runs.last_mut() {
            last.1 = head.1;
        }
    }

    let gaps = runs
        .into_iter()
        .map(|(s, e)| (time_from_minutes(s), time_from_minutes(e)))
        .collect();

    let mut overlaps = Vec::new();
    for (i, a) in windows.iter().enumerate() {
        for b in &windows[i + 1..] {
            if (0..1440).any(|m| a.contains_minute(m) && b.contains_minute(m)) {
                overlaps.push((a.name.clone(), b.name.clone()));
            }
        }
    }

    Coverage { gaps, overlaps }
}
