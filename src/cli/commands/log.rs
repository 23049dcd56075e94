use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if !Path::new(&cfg.database).exists() {
            info(format!("No journal at {} (run `grifo init`)", cfg.database));
            return Ok(());
        }
        let mut pool = DbPool::open_journal(&cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
