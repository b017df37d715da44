use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use chrono::Local;

use crate::error::{Error, Result};

/// Appends timestamped log lines to a file.
pub struct Logger {
    file: Mutex<std::fs::File>,
    level: LevelFilter,
}

impl Logger {
    pub fn new(log_file: &Path, level: LevelFilter) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;

        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(
                file,
                "{} [{}] {}: {}",
                timestamp,
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

/// Parses `trace`..`error` (or `off`), case-insensitively.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| Error::ConfigError(format!("unknown log level '{}'", level)))
}

/// Installs a [`Logger`] writing to `log_file` as the global logger.
pub fn init(log_file: &Path, level: LevelFilter) -> Result<()> {
    let logger = Logger::new(log_file, level)?;
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| Error::ConfigError(format!("logger already installed: {}", e)))?;
    log::set_max_level(level);
    Ok(())
}
