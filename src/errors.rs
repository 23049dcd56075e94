//! Unified application error type.
//! Resolvers, config, journal and CLI all return AppError so the binary
//! can report any failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Journal database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday name: {0}")]
    InvalidWeekday(String),

    #[error("Invalid month name: {0}")]
    InvalidMonth(String),

    #[error("Invalid day of month: {0} (expected 1-31)")]
    InvalidDayOfMonth(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    /// Empty shift table, recurrence missing a field required by its
    /// frequency, or an unreadable configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output / backup
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Backup error: {0}")]
    Backup(String),
}

pub type AppResult<T> = Result<T, AppError>;
