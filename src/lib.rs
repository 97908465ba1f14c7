//! logtally — count repeated `[Log]` messages in an application log.
//!
//! Reads one log file, keeps the lines tagged `[Log]`, aggregates them by
//! exact message text, and exports a CSV summary sorted by frequency. The
//! pipeline driver lives here (rather than in `main.rs`) so integration tests
//! can run it against a captured console.
//!
//! # Architecture
//!
//! ```text
//! read ──► extract ──► tally ──► report ──► parsed_log.csv
//!  │
//!  └──► --print_log echo
//! ```
//!
//! Everything runs on the calling thread, once, start to finish.

pub mod cli;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use logtally_core::config::Config;
use logtally_core::report::{export_csv, ReportError};
use logtally_core::{extract_lines, log_lines, Tally};

pub use cli::Cli;

/// How a run ended. Fatal problems (unreadable input, bad config) are
/// returned as `Err` from [`run`] instead.
#[derive(Debug)]
pub enum Outcome {
    /// The report was written to this absolute path.
    Exported(PathBuf),
    /// No tagged lines were found; nothing was written.
    NoEvents,
    /// The report could not be written; nothing was left on disk.
    ExportFailed(ReportError),
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Exported(_) | Outcome::NoEvents => ExitCode::SUCCESS,
            Outcome::ExportFailed(_) => ExitCode::FAILURE,
        }
    }
}

/// Run the whole pipeline once. User-facing messages go to `console`.
pub fn run(cli: &Cli, config: &Config, console: &mut impl Write) -> anyhow::Result<Outcome> {
    let options = config.report.options()?;
    let text = read_log(&cli.log)?;

    let tally: Tally = extract_lines(&text, config.extract.timestamp).collect();
    tracing::info!(
        log = %cli.log.display(),
        matched = tally.total(),
        events = tally.len(),
        "log parsed"
    );

    if cli.print_log {
        for line in log_lines(&text) {
            writeln!(console, "{}", line.trim())?;
        }
    }

    if tally.is_empty() {
        writeln!(console, "No events found in the log file.")?;
        return Ok(Outcome::NoEvents);
    }

    let output = cli.export_csv.as_ref().unwrap_or(&config.report.output);
    match export_csv(&tally, output, &options) {
        Ok(path) => {
            writeln!(console, "Export successful!")?;
            writeln!(console, "File saved to: {}", path.display())?;
            Ok(Outcome::Exported(path))
        }
        Err(e) => {
            tracing::warn!(output = %output.display(), error = %e, "export failed");
            writeln!(console, "Error exporting to CSV: {e}")?;
            Ok(Outcome::ExportFailed(e))
        }
    }
}

/// Read the whole log into memory, replacing invalid UTF-8 rather than
/// failing on it.
fn read_log(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read log file {}", path.display()))?;
    tracing::debug!(bytes = bytes.len(), "log file read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
