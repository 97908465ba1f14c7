//! Tally — insertion-ordered aggregation of [`LogLine`] values into
//! [`EventRecord`]s keyed by exact message text.
//!
//! The tally is the single source of truth for one run; the reporter reads
//! from it, never from the extractor directly. Records are stored in a `Vec`
//! in first-occurrence order with a side index for lookups, so iteration
//! order is always the order in which messages first appeared in the file.

use std::collections::HashMap;

use crate::types::{EventRecord, LogLine};

/// Message → [`EventRecord`] mapping that remembers first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    records: Vec<EventRecord>,
    index: HashMap<String, usize>,
    total: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line into the tally.
    ///
    /// A new message gets `count = 1` and both timestamps set. A repeat bumps
    /// `count` and overwrites `last_time`; `first_time` is left alone.
    pub fn record(&mut self, line: LogLine<'_>) {
        self.total += 1;
        match self.index.get(line.message) {
            Some(&slot) => self.records[slot].seen_again(line.timestamp),
            None => {
                self.index.insert(line.message.to_string(), self.records.len());
                self.records.push(EventRecord::first_seen(line));
            }
        }
    }

    /// Number of distinct messages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of lines folded in, counting repeats.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, message: &str) -> Option<&EventRecord> {
        self.index.get(message).map(|&slot| &self.records[slot])
    }

    /// Records in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// Records sorted by `count` descending. The sort is stable, so equal
    /// counts keep first-occurrence order.
    pub fn ranked(&self) -> Vec<&EventRecord> {
        let mut ranked: Vec<&EventRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

impl<'a> Extend<LogLine<'a>> for Tally {
    fn extend<I: IntoIterator<Item = LogLine<'a>>>(&mut self, lines: I) {
        for line in lines {
            self.record(line);
        }
    }
}

impl<'a> FromIterator<LogLine<'a>> for Tally {
    fn from_iter<I: IntoIterator<Item = LogLine<'a>>>(lines: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(lines);
        tally
    }
}

impl<'t> IntoIterator for &'t Tally {
    type Item = &'t EventRecord;
    type IntoIter = std::slice::Iter<'t, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
