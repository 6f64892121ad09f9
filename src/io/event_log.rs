//! Event log implementations
//!
//! `ConsoleLog` prints lines of the form `[HH:MM:SS.mmm][label] message`.
//! `MemoryLog` keeps records in memory so tests can assert on them.

use crate::core::EventLog;
use chrono::{DateTime, Local};
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Format one log line
///
/// Pure helper so the layout can be tested without a clock.
pub fn format_line(timestamp: DateTime<Local>, label: &str, message: &str) -> String {
    format!("[{}][{}] {}", timestamp.format("%H:%M:%S%.3f"), label, message)
}

/// Event log writing timestamped lines to a writer
pub struct ConsoleLog {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLog {
    /// Log to any writer
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Log to standard output
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Log to standard error
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }
}

impl EventLog for ConsoleLog {
    fn record(&self, label: &str, message: &str) {
        let line = format_line(Local::now(), label, message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            tracing::warn!(error = %e, "failed to write log line");
        }
    }
}

/// A captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub label: String,
    pub message: String,
}

/// Event log that stores every record in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded under `label`
    pub fn messages_for(&self, label: &str) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.label == label)
            .map(|r| r.message)
            .collect()
    }
}

impl EventLog for MemoryLog {
    fn record(&self, label: &str, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                label: label.to_string(),
                message: message.to_string(),
            });
    }
}
