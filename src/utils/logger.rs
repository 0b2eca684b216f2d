//! File-backed logger for the `log` facade.
//!
//! The terminal is in raw mode on the alternate screen while ffm runs, so
//! diagnostics never go to stderr. They are appended to a file instead, which
//! is enabled by `general.log_file` or the `FFM_LOG` environment variable.

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned lock or a failed write drops the record.
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Installs the global logger.
///
/// `FFM_LOG` takes precedence over the configured path. Returns `Ok(false)`
/// when neither is set and logging stays disabled.
pub fn init(configured: Option<&Path>, level: LevelFilter) -> io::Result<bool> {
    let path = match std::env::var_os("FFM_LOG") {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => match configured {
            Some(p) => p.to_path_buf(),
            None => return Ok(false),
        },
    };

    let logger = FileLogger::open(&path, level)?;
    log::set_boxed_logger(Box::new(logger)).map_err(io::Error::other)?;
    log::set_max_level(level);
    Ok(true)
}
