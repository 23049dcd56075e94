use crate::errors::{AppError, AppResult};
use crate::models::recurrence::RecurrenceSpec;
use crate::models::window::WindowTable;
use crate::utils::time::time_from_minutes;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Journal database (SQLite) path.
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub shifts: WindowTable,
    #[serde(default = "default_backup_schedule")]
    pub backup_schedule: RecurrenceSpec,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_backup_schedule() -> RecurrenceSpec {
    RecurrenceSpec::Daily {
        at: time_from_minutes(3 * 60),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            shifts: WindowTable::default(),
            backup_schedule: default_backup_schedule(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("grifo")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".grifo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("grifo.conf")
    }

    /// Return the full path of the journal database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("grifo.sqlite")
    }

    /// Load the configuration from `path` (or the standard location).
    /// A missing file yields the defaults; an unreadable or invalid one
    /// is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Initialize configuration and journal database files.
    ///
    /// `custom_db` may be relative, in which case it lands in the config
    /// directory. In test mode the configuration file is not written.
    pub fn init_all(
        config_path: Option<&Path>,
        custom_db: Option<&str>,
        is_test: bool,
    ) -> AppResult<(PathBuf, Config)> {
        let dir = Self::config_dir();
        let conf_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let mut config = Self::load(Some(conf_path.as_path()))?;

        if let Some(name) = custom_db {
            let p = Path::new(name);
            let db_path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            };
            config.database = db_path.to_string_lossy().to_string();
        }

        if !is_test {
            config.save(&conf_path)?;
        }

        if let Some(parent) = Path::new(&config.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok((conf_path, config))
    }
}
