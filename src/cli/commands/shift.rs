use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, ShiftStatus};
use crate::errors::AppResult;
use crate::ui::messages::{field, header, warning};
use crate::utils::colors::{GREEN, paint};
use crate::utils::date::{self, format_instant_long, parse_instant};
use crate::utils::table::Table;
use crate::utils::time::{format_hhmm, format_span, minutes_of_day};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { at, list, json } = cmd {
        let now = match at {
            Some(s) => parse_instant(s)?,
            None => date::now(),
        };

        if *list {
            if *json {
                println!("{}", serde_json::to_string_pretty(&cfg.shifts)?);
            } else {
                print_table(cfg, now);
            }
            return Ok(());
        }

        let status = Core::shift_status(cfg, now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            print_status(&status);
        }
    }

    Ok(())
}

fn print_status(status: &ShiftStatus) {
    let w = &status.window;

    if w.fallback {
        warning(format!(
            "No shift covers {}; using the first configured shift",
            status.at.format("%H:%M")
        ));
    }

    header(format!("Shift {}", w.name));
    field("at", format_instant_long(&status.at));
    field("from", format_instant_long(&w.from));
    field("to", format_instant_long(&w.to));
    field("elapsed", format_span(status.elapsed_minutes));
    field("remaining", format_span(status.remaining_minutes));
}

fn print_table(cfg: &Config, now: NaiveDateTime) {
    let t = minutes_of_day(now.time());
    let mut matched = false;

    let mut table = Table::new(["#", "SHIFT", "START", "END", "LENGTH", ""]);
    for (i, w) in cfg.shifts.windows().iter().enumerate() {
        let mut note = String::new();
        if w.wraps() {
            note.push_str("crosses midnight");
        }
        if !matched && w.contains_minute(t) {
            matched = true;
            if !note.is_empty() {
                note.push_str(", ");
            }
            note.push_str(&paint(GREEN, "◀ current"));
        }

        table.add_row(vec![
            (i + 1).to_string(),
            w.name.clone(),
            format_hhmm(w.start),
            format_hhmm(w.end),
            format_span(w.duration_minutes() as i64),
            note,
        ]);
    }

    print!("{}", table.render());
}
