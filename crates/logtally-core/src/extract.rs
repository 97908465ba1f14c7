//! Extractor — pulls tagged [`LogLine`] values out of raw log text.
//!
//! A line is kept in two explicit steps:
//!
//! 1. a cheap pre-filter on the tag marker `[Log]`, then
//! 2. a single split on the compound delimiter `"] [Log] "`.
//!
//! Lines that pass step 1 but not step 2 (e.g. `[12:00:00][Log] x`) are
//! dropped.

use serde::Deserialize;

use crate::types::LogLine;

/// Substring a line must contain to be considered at all.
pub const TAG_MARKER: &str = "[Log]";

/// Substring a candidate line is split on. Everything before it is the
/// timestamp prefix, everything after it is the message.
pub const DELIMITER: &str = "] [Log] ";

/// Character range of the timestamp inside the prefix in [`TimestampMode::Legacy`].
///
/// `[10:00:01` → `10:00:01`. This assumes an 8-character timestamp directly
/// after the opening bracket. Wider timestamps are truncated, narrower
/// prefixes yield a short token.
const LEGACY_TS_CHARS: std::ops::Range<usize> = 1..9;

/// How the timestamp token is cut out of the line prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Fixed 8-character slice starting after the leading bracket.
    #[default]
    Legacy,
    /// Whole prefix with one leading `[` removed, any width.
    Bracketed,
}

/// Derive the timestamp token from the text preceding the delimiter.
///
/// Never fails: a malformed prefix produces a truncated or garbled token.
/// Indices are in characters, so a multi-byte prefix is never split inside a
/// code point.
pub fn timestamp_token(prefix: &str, mode: TimestampMode) -> &str {
    match mode {
        TimestampMode::Legacy => char_slice(prefix, LEGACY_TS_CHARS),
        TimestampMode::Bracketed => prefix.strip_prefix('[').unwrap_or(prefix),
    }
}

/// Extract a single line. Returns `None` for every line that is not a
/// tagged entry. A delimiter with nothing but whitespace after it yields an
/// empty message.
pub fn extract_line(line: &str, mode: TimestampMode) -> Option<LogLine<'_>> {
    if !line.contains(TAG_MARKER) {
        return None;
    }

    let Some((prefix, rest)) = line.split_once(DELIMITER) else {
        tracing::trace!(line, "tag marker present without delimiter; skipped");
        return None;
    };

    Some(LogLine {
        timestamp: timestamp_token(prefix, mode),
        message: rest.trim(),
    })
}

/// Lazily extract every tagged line from `text`, in file order.
///
/// Lines are split by [`log_lines`]. An empty input yields nothing.
pub fn extract_lines(text: &str, mode: TimestampMode) -> impl Iterator<Item = LogLine<'_>> {
    log_lines(text).filter_map(move |line| extract_line(line, mode))
}

/// Split `text` into lines on `\n`, `\r\n`, or a lone `\r`, without the
/// terminators. A final terminator does not produce a trailing empty line.
pub fn log_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let current = rest;
        if current.is_empty() {
            return None;
        }
        let Some(end) = current.find(['\r', '\n']) else {
            rest = "";
            return Some(current);
        };
        let width = if current[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &current[end + width..];
        Some(&current[..end])
    })
}

fn char_slice(s: &str, range: std::ops::Range<usize>) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[byte_at(range.start)..byte_at(range.end)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
