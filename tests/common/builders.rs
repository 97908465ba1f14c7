//! Test builders — ergonomic constructors for log files and CLI invocations.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

use logtally::{Cli, Outcome};
use logtally_core::config::Config;

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

/// A scratch directory holding one log file and whatever the run writes.
///
/// ```rust
/// let ws = Workspace::with_log(&corpus_text(SCENARIO_A));
/// let run = ws.cli().print_log().run();
/// ```
pub struct Workspace {
    pub dir: tempfile::TempDir,
    pub log: PathBuf,
}

impl Workspace {
    pub fn with_log(contents: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let log = dir.path().join("Player.log");
        std::fs::write(&log, contents).expect("write log fixture");
        Self { dir, log }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Files in the workspace other than the input log.
    pub fn outputs(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("list temp dir")
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name != "Player.log")
            .collect();
        names.sort();
        names
    }

    pub fn cli(&self) -> CliBuilder {
        CliBuilder::new(&self.log).export_csv(self.path("parsed_log.csv"))
    }
}

// ---------------------------------------------------------------------------
// CliBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a [`Cli`] plus the [`Config`] it runs with.
pub struct CliBuilder {
    cli: Cli,
    config: Config,
}

impl CliBuilder {
    pub fn new(log: &Path) -> Self {
        Self {
            cli: Cli {
                log: log.to_path_buf(),
                export_csv: None,
                print_log: false,
                config: None,
                debug: false,
            },
            config: Config::defaults(),
        }
    }

    pub fn export_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.cli.export_csv = Some(path.into());
        self
    }

    pub fn no_export_flag(mut self) -> Self {
        self.cli.export_csv = None;
        self
    }

    pub fn print_log(mut self) -> Self {
        self.cli.print_log = true;
        self
    }

    pub fn config(mut self, edit: impl FnOnce(&mut Config)) -> Self {
        edit(&mut self.config);
        self
    }

    /// Run the pipeline, capturing console output.
    pub fn run(self) -> RunResult {
        let mut console = Vec::new();
        let outcome = logtally::run(&self.cli, &self.config, &mut console);
        RunResult {
            outcome,
            console: String::from_utf8(console).expect("console output is UTF-8"),
        }
    }
}

/// What a pipeline run returned and printed.
pub struct RunResult {
    pub outcome: anyhow::Result<Outcome>,
    pub console: String,
}

impl RunResult {
    pub fn outcome(&self) -> &Outcome {
        match &self.outcome {
            Ok(outcome) => outcome,
            Err(e) => panic!("run failed fatally: {e:#}\nconsole:\n{}", self.console),
        }
    }
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

/// One parsed data row: (event, count, first_time, last_time).
pub type Row = (String, usize, String, String);

/// Parse report bytes back into header + rows.
pub fn parse_report(bytes: &[u8], delimiter: u8) -> (Vec<String>, Vec<Row>) {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(bytes);
    let headers = rdr
        .headers()
        .expect("report has a header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = rdr
        .deserialize::<Row>()
        .collect::<Result<_, _>>()
        .expect("every row parses");
    (headers, rows)
}

/// Read and parse a comma-delimited report file.
pub fn read_report(path: &Path) -> (Vec<String>, Vec<Row>) {
    let bytes = std::fs::read(path).expect("read report");
    parse_report(&bytes, b',')
}
