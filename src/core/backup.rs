use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the journal database to `dest_file`.
    ///
    /// With `compress` the result is `<dest_file>.zip` holding the database
    /// and, when it exists, the configuration file. An existing target is
    /// only replaced with `force`. Returns the path actually written.
    pub fn backup(
        cfg: &Config,
        config_path: &Path,
        dest_file: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let target = if compress {
            dest_file.with_extension("zip")
        } else {
            dest_file.to_path_buf()
        };

        // 2️⃣ Refuse to clobber the source or an existing file
        if target.exists() {
            if fs::canonicalize(&target)? == fs::canonicalize(src)? {
                return Err(AppError::Backup(format!(
                    "destination {} is the database itself",
                    target.display()
                )));
            }
            if !force {
                return Err(AppError::Backup(format!(
                    "{} already exists (use --force to overwrite)",
                    target.display()
                )));
            }
        }

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Copy or archive
        if compress {
            let mut sources = vec![src.to_path_buf()];
            if config_path.exists() {
                sources.push(config_path.to_path_buf());
            }
            write_zip(&target, &sources)?;
            success(format!("Compressed backup created: {}", target.display()));
        } else {
            fs::copy(src, &target)?;
            success(format!("Backup created: {}", target.display()));
        }

        // 4️⃣ Journal
        ttlog_quiet(
            &cfg.database,
            "backup",
            &target.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(target)
    }
}

/// Write every file in `sources` into a deflated zip at `zip_path`,
/// stored under its file name.
fn write_zip(zip_path: &Path, sources: &[PathBuf]) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in sources {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Backup(format!("not a file: {}", path.display())))?;

        zip.start_file(name, options.clone())?;
        let mut f = fs::File::open(path)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}
