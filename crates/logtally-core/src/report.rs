//! Report — serialises a [`Tally`] as a CSV summary.
//!
//! Rows are ordered by count descending (stable, ties in first-occurrence
//! order) and preceded by exactly one header record. Quoting follows the
//! usual CSV rules: a field is quoted only when it contains the delimiter, a
//! quote, or a line break. Every record ends in `\r\n`.
//!
//! [`export_csv`] never leaves a partial file behind. The report is written
//! to a temporary file next to the destination and renamed into place only
//! after every row has been flushed.

use std::io;
use std::path::{Path, PathBuf};

use crate::tally::Tally;
use crate::types::ReportRow;

/// Fixed header record. The trailing `": "` is part of each column name.
pub const HEADERS: [&str; 4] = [
    "Type of Event: ",
    "How many times event happened: ",
    "First Time Event: ",
    "Last Time Event: ",
];

/// Output knobs for the CSV writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Field delimiter byte, `b','` unless configured otherwise.
    pub delimiter: u8,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Why a report could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot create report file in {}: {source}", .dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("cannot save report to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write the header and one row per record to `writer`, returning the writer
/// once everything has been flushed.
pub fn write_report<W: io::Write>(
    tally: &Tally,
    writer: W,
    options: &ReportOptions,
) -> Result<W, ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(csv::Terminator::CRLF)
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADERS)?;
    for record in tally.ranked() {
        wtr.serialize(ReportRow::from(record))?;
    }
    wtr.flush()?;

    wtr.into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))
}

/// Write the report to `path` and return its absolute location.
///
/// On any failure the destination is left untouched and the temporary file
/// is removed.
pub fn export_csv(
    tally: &Tally,
    path: impl AsRef<Path>,
    options: &ReportOptions,
) -> Result<PathBuf, ReportError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = temp_builder()
        .tempfile_in(dir)
        .map_err(|source| ReportError::Create {
            dir: dir.to_path_buf(),
            source,
        })?;
    tracing::debug!(tmp = %tmp.path().display(), "staging report");

    let tmp = write_report(tally, tmp, options)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ReportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::info!(rows = tally.len(), path = %resolved.display(), "report written");
    Ok(resolved)
}

fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".logtally-").suffix(".csv.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    builder
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
