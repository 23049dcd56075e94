use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the journal database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli.config.as_deref().map(expand_tilde);
    let (path, cfg) = Config::init_all(config_path.as_deref(), cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing grifo…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::open_journal(&cfg.database)?;
    success(format!("Database initialized at {}", &cfg.database));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &cfg.database,
        &format!("Initialized with {} shift(s)", cfg.shifts.len()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 grifo initialization completed!");
    Ok(())
}
