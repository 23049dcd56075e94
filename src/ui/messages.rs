//! Status lines printed by the CLI (the user-facing half of logging; the
//! persistent half is the journal in `db::log`).

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(color: &str, icon: &str) -> String {
    format!("{color}{BOLD}{icon}{RESET}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(BLUE, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(GREEN, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(YELLOW, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(RED, ICON_ERR), msg);
}

/// Aligned "label : value" line.
pub fn field<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("  {:<12}: {}", label.to_string(), value);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}== {msg} =={RESET}\n");
}
