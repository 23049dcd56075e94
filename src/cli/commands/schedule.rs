use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::models::LogRow;
use crate::db::pool::DbPool;
use crate::db::queries::last_entry;
use crate::errors::AppResult;
use crate::models::recurrence::NextOccurrence;
use crate::ui::messages::{field, header, warning};
use crate::utils::date::{self, format_instant_long, parse_instant};
use crate::utils::time::format_span;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { at, count, json } = cmd {
        let now = match at {
            Some(s) => parse_instant(s)?,
            None => date::now(),
        };

        let next = Core::next_backup(cfg, now)?;
        let upcoming = if *count > 1 {
            Core::upcoming_backups(cfg, now, *count)?
        } else {
            next.instant().into_iter().collect()
        };
        let last = last_backup(cfg);

        if *json {
            let out = serde_json::json!({
                "schedule": cfg.backup_schedule,
                "now": now,
                "next": next,
                "upcoming": upcoming,
                "last_backup": last.as_ref().map(|r| r.raw_date.clone()),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        header("Backup schedule");
        field("rule", cfg.backup_schedule);
        field("now", format_instant_long(&now));

        match next {
            NextOccurrence::Disabled => field("next", "disabled"),
            NextOccurrence::At(dt) => {
                field("next", format_instant_long(&dt));
                field("due in", format_span((dt - now).num_minutes()));
            }
        }

        for (i, dt) in upcoming.iter().enumerate().skip(1) {
            field(format!("#{}", i + 1), format_instant_long(dt));
        }

        match last {
            Some(row) => field("last backup", format!("{} ({})", row.display_date(), row.target)),
            None => field("last backup", "never"),
        }
    }

    Ok(())
}

/// Latest journaled backup. A missing or unreadable journal just means
/// "unknown", it never fails the command.
fn last_backup(cfg: &Config) -> Option<LogRow> {
    if !Path::new(&cfg.database).exists() {
        return None;
    }

    let result = DbPool::open_journal(&cfg.database)
        .and_then(|mut pool| last_entry(&mut pool, "backup"));

    match result {
        Ok(row) => row,
        Err(e) => {
            warning(format!("Cannot read journal: {}", e));
            None
        }
    }
}
