//! Logger utility for application-wide logging
//!
//! This module provides a file logger that works alongside the standard
//! log crate, plus console logging through env_logger when no file is wanted.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output, `None` when disabled
    file: Mutex<Option<File>>,
    /// Most verbose level written by the `Log` implementation
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Debug,
        })
    }

    /// Creates a logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Off,
        }
    }

    /// Set the most verbose level accepted through the `log` facade
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Whether this logger writes to a file
    pub fn is_enabled(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }

    /// Install env_logger on stderr as the global `log` backend
    ///
    /// `RUST_LOG` overrides `level` when set.
    pub fn init_console_logger(level: LevelFilter) {
        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();

        if result.is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger_accepts_messages() {
        let logger = Logger::disabled();
        assert!(!logger.is_enabled());
        assert!(logger.log("dropped").is_ok());
    }

    #[test]
    fn test_file_logger_writes_lines() {
        let path = std::env::temp_dir().join(format!("routekit_logger_test_{}.log", std::process::id()));
        let path_str = path.to_str().unwrap();
        let logger = Logger::new(path_str).unwrap();
        assert!(logger.is_enabled());
        logger.log("first").unwrap();
        logger.log("second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }
}
