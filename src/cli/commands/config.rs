use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !(*print_config || *check || *edit_config) {
            info("Nothing to do: use --print, --check or --edit");
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(cfg, config_path)?;
        }

        if *check {
            ConfigLogic::check(cfg)?;
        }

        if *edit_config {
            if !config_path.exists() {
                cfg.save(config_path)?;
            }
            ConfigLogic::edit(config_path, editor)?;
            ttlog_quiet(
                &cfg.database,
                "config",
                &config_path.to_string_lossy(),
                "Configuration edited",
            );
        }
    }

    Ok(())
}
