//! I/O module
//!
//! Handles console logging and report output.
//!
//! # Components
//!
//! - `event_log` - Timestamped, labelled log lines (console and in-memory)
//! - `report` - Section headers, summary lines and the comparison block
//! - `csv_format` - CSV output of per-client outcomes

pub mod csv_format;
pub mod event_log;
pub mod report;

pub use csv_format::{write_outcomes_csv, OutcomeRow};
pub use event_log::{format_line, ConsoleLog, LogRecord, MemoryLog};
pub use report::{summary_line, write_comparison, write_section_header};
