use crate::config::Config;
use crate::core::calculator::shift::coverage;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, success, warning};
use crate::utils::time::format_hhmm;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report how the shift table covers the day. Gaps or overlaps make
    /// the check fail.
    pub fn check(cfg: &Config) -> AppResult<()> {
        let report = coverage(&cfg.shifts);

        field("shifts", cfg.shifts.len());
        field("backup", cfg.backup_schedule);

        for (from, to) in &report.gaps {
            warning(format!(
                "No shift covers {} - {}",
                format_hhmm(*from),
                format_hhmm(*to)
            ));
        }
        for (a, b) in &report.overlaps {
            warning(format!("Shifts '{}' and '{}' overlap ('{}' wins)", a, b, a));
        }

        if report.tiles_day() {
            success("Shift table covers the whole day with no overlaps");
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "shift table has {} gap(s) and {} overlap(s)",
                report.gaps.len(),
                report.overlaps.len()
            )))
        }
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", editor_to_use));
            }
            _ => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));

                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(format!("cannot run '{default_editor}': {e}")))?;

                if !status.success() {
                    return Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        default_editor, status
                    )));
                }
                success(format!("Configuration edited with '{}'", default_editor));
            }
        }

        // Reject an edit that left the file unparsable.
        Config::load_from(path).map(|_| ())
    }
}
