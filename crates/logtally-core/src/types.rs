//! Core types for logtally-core.
//!
//! This module defines the data structures handed from stage to stage: the
//! ephemeral [`LogLine`], the aggregated [`EventRecord`], and the
//! serialisable [`ReportRow`] projection.

use serde::Serialize;

/// One tagged line pulled out of the input by the extractor.
///
/// Both fields borrow from the input text; a `LogLine` never outlives the
/// buffer it was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// Timestamp token sliced out of the bracketed prefix. Opaque text; it is
    /// never parsed or validated.
    pub timestamp: &'a str,
    /// Everything after the compound delimiter, whitespace trimmed.
    pub message: &'a str,
}

/// Aggregated statistics for one distinct message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Exact message text. Compared byte-for-byte; no case folding.
    pub message: String,
    /// Number of occurrences, always ≥ 1.
    pub count: usize,
    /// Timestamp of the first occurrence in file order. Set once.
    pub first_time: String,
    /// Timestamp of the latest occurrence in file order.
    pub last_time: String,
}

impl EventRecord {
    pub(crate) fn first_seen(line: LogLine<'_>) -> Self {
        Self {
            message: line.message.to_string(),
            count: 1,
            first_time: line.timestamp.to_string(),
            last_time: line.timestamp.to_string(),
        }
    }

    pub(crate) fn seen_again(&mut self, timestamp: &str) {
        self.count += 1;
        self.last_time.clear();
        self.last_time.push_str(timestamp);
    }
}

/// One CSV data row. Field order matches the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRow<'a> {
    pub event: &'a str,
    pub count: usize,
    pub first_time: &'a str,
    pub last_time: &'a str,
}

impl<'a> From<&'a EventRecord> for ReportRow<'a> {
    fn from(record: &'a EventRecord) -> Self {
        Self {
            event: &record.message,
            count: record.count,
            first_time: &record.first_time,
            last_time: &record.last_time,
        }
    }
}
