use crate::config::Config;
use crate::core::calculator::{schedule, shift};
use crate::errors::AppResult;
use crate::models::recurrence::NextOccurrence;
use crate::models::window::ResolvedWindow;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Current shift plus where `now` sits inside it.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftStatus {
    #[serde(flatten)]
    pub window: ResolvedWindow,
    pub at: NaiveDateTime,
    pub elapsed_minutes: i64,
    pub remaining_minutes: i64,
}

pub struct Core;

impl Core {
    pub fn shift_status(cfg: &Config, now: NaiveDateTime) -> ShiftStatus {
        let window = shift::resolve_window(&cfg.shifts, now);
        let elapsed = (now - window.from).num_minutes();
        let remaining = (window.to - now).num_minutes();

        ShiftStatus {
            window,
            at: now,
            elapsed_minutes: elapsed,
            remaining_minutes: remaining,
        }
    }

    pub fn next_backup(cfg: &Config, now: NaiveDateTime) -> AppResult<NextOccurrence> {
        schedule::next_occurrence(&cfg.backup_schedule, now)
    }

    pub fn upcoming_backups(
        cfg: &Config,
        now: NaiveDateTime,
        count: usize,
    ) -> AppResult<Vec<NaiveDateTime>> {
        schedule::upcoming(&cfg.backup_schedule, now, count)
    }
}
