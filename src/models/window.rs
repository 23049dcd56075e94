use crate::errors::{AppError, AppResult};
use crate::utils::time::{hhmm, minutes_of_day, time_from_minutes};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A labelled time-of-day interval [start, end). When `start > end`
/// the window spans midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedWindow {
    pub name: String,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl NamedWindow {
    pub fn new(name: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn start_minute(&self) -> u32 {
        minutes_of_day(self.start)
    }

    pub fn end_minute(&self) -> u32 {
        minutes_of_day(self.end)
    }

    pub fn wraps(&self) -> bool {
        self.start_minute() > self.end_minute()
    }

    /// Inclusive start, exclusive end.
    pub fn contains_minute(&self, t: u32) -> bool {
        let (s, e) = (self.start_minute(), self.end_minute());
        if s <= e {
            s <= t && t < e
        } else {
            t >= s || t < e
        }
    }

    /// Length of the window in minutes (a wrapping window counts across midnight).
    pub fn duration_minutes(&self) -> u32 {
        let (s, e) = (self.start_minute(), self.end_minute());
        if s <= e { e - s } else { 1440 - s + e }
    }
}

/// Ordered, non-empty list of shifts. Order matters: when windows overlap,
/// the one listed first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NamedWindow>", into = "Vec<NamedWindow>")]
pub struct WindowTable {
    windows: Vec<NamedWindow>,
}

impl WindowTable {
    pub fn new(windows: Vec<NamedWindow>) -> AppResult<Self> {
        if windows.is_empty() {
            return Err(AppError::Config("shift table is empty".into()));
        }

        for (i, w) in windows.iter().enumerate() {
            if w.name.trim().is_empty() {
                return Err(AppError::Config(format!("shift #{} has an empty name", i + 1)));
            }
            if windows[..i].iter().any(|prev| prev.name == w.name) {
                return Err(AppError::Config(format!("duplicate shift name '{}'", w.name)));
            }
        }

        Ok(Self { windows })
    }

    pub fn windows(&self) -> &[NamedWindow] {
        &self.windows
    }

    /// Entry used when no window contains the queried instant.
    pub fn fallback(&self) -> &NamedWindow {
        &self.windows[0]
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// The station's three shifts: Leon 05-12, Tarde 12-19, Buho 19-05.
impl Default for WindowTable {
    fn default() -> Self {
        let hm = |h: u32, m: u32| time_from_minutes(h * 60 + m);
        Self {
            windows: vec![
                NamedWindow::new("Leon", hm(5, 0), hm(12, 0)),
                NamedWindow::new("Tarde", hm(12, 0), hm(19, 0)),
                NamedWindow::new("Buho", hm(19, 0), hm(5, 0)),
            ],
        }
    }
}

impl TryFrom<Vec<NamedWindow>> for WindowTable {
    type Error = AppError;

    fn try_from(value: Vec<NamedWindow>) -> Result<Self, Self::Error> {
        WindowTable::new(value)
    }
}

impl From<WindowTable> for Vec<NamedWindow> {
    fn from(value: WindowTable) -> Self {
        value.windows
    }
}

/// Concrete occurrence of a shift anchored to the queried instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWindow {
    pub name: String,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    /// True when no window contained the instant and the table's
    /// fallback entry was returned instead.
    pub fallback: bool,
}

impl ResolvedWindow {
    pub fn contains(&self, t: &NaiveDateTime) -> bool {
        self.from <= *t && *t < self.to
    }
}
