//! Rolling Logger
//!
//! A `log` backend for the browser. Every record is mirrored to the devtools
//! console (stderr on native targets) and the most recent lines are kept in a
//! bounded ring so they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a circular buffer of formatted lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push_line(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Utc::now().format("%H:%M:%S%.3f");
        let line = format_line(&timestamp.to_string(), record);
        emit(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

/// Format one record as `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger.
///
/// Returns the installed instance so callers can read `recent_lines()`.
/// Fails if another logger was already registered.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn installed() -> Option<&'static RollingLogger> {
    LOGGER.get()
}
