//! Journal row models.

use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    /// Parsed RFC 3339 timestamp; `None` when the stored text is not one.
    pub date: Option<DateTime<FixedOffset>>,
    pub raw_date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogRow {
    pub fn display_date(&self) -> String {
        self.date
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or_else(|| self.raw_date.clone())
    }
}
