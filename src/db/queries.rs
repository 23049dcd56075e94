use crate::db::models::LogRow;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, Result, Row};

pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<LogRow>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent journal entry for `operation`, if any.
pub fn last_entry(pool: &mut DbPool, operation: &str) -> AppResult<Option<LogRow>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log
         WHERE operation = ?1
         ORDER BY id DESC
         LIMIT 1",
    )?;

    Ok(stmt.query_row([operation], map_row).optional()?)
}

pub fn map_row(row: &Row) -> Result<LogRow> {
    let raw_date: String = row.get("date")?;
    let date = chrono::DateTime::parse_from_rfc3339(&raw_date).ok();

    Ok(LogRow {
        id: row.get("id")?,
        date,
        raw_date,
        operation: row.get("operation")?,
        target: row
            .get::<_, Option<String>>("target")?
            .unwrap_or_default(),
        message: row.get("message")?,
    })
}
