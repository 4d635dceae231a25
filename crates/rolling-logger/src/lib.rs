//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a fixed-size
//! circular buffer and forwards every record to a sink: the browser console
//! on `wasm32`, stderr everywhere else.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Most verbose level that is recorded
    pub level: LevelFilter,
    /// How many records the circular buffer holds
    pub capacity: usize,
    /// Whether records are also written to the console / stderr
    pub echo: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: DEFAULT_CAPACITY,
            echo: true,
        }
    }
}

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub at: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    /// Single-line rendering used for console output
    pub fn render(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.at.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular-buffer logger
pub struct RollingLogger {
    config: LoggerConfig,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            config: LoggerConfig { capacity, ..config },
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Store a line, evicting the oldest once the buffer is full
    pub fn push(&self, line: LogLine) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.config.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            at: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.config.echo {
            sink::write(&line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let level = config.level;
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogLine;
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn write(line: &LogLine) {
        let text = JsValue::from_str(&line.render());
        match line.level {
            Level::Error => web_sys::console::error_1(&text),
            Level::Warn => web_sys::console::warn_1(&text),
            Level::Info => web_sys::console::info_1(&text),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&text),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogLine;

    pub fn write(line: &LogLine) {
        eprintln!("{}", line.render());
    }
}
