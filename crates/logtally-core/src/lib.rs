//! logtally-core — extraction, aggregation, and reporting for logtally.
//!
//! This crate exposes the three pipeline stages as public modules, plus the
//! shared types that flow between them.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Extract ──► Tally ──► Report ──► CSV
//!              (LogLine)  (EventRecord)  (ReportRow)
//! ```
//!
//! Every stage is synchronous and single-pass. The [`Tally`] is owned by the
//! caller and passed explicitly from one stage to the next.

pub mod config;
pub mod extract;
pub mod report;
pub mod tally;
pub mod types;

pub use extract::{extract_lines, log_lines, timestamp_token, TimestampMode};
pub use report::{export_csv, write_report, ReportError, ReportOptions};
pub use tally::Tally;
pub use types::{EventRecord, LogLine, ReportRow};
