//! Command-line surface for the `logtally` binary.

use std::path::PathBuf;

use clap::Parser;
use logtally_core::config::Config;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "logtally",
    version,
    about = "Count repeated [Log] messages in an application log and export a CSV summary"
)]
pub struct Cli {
    /// Path to the application console log file.
    #[arg(long, value_name = "PATH")]
    pub log: PathBuf,

    /// Where to write the CSV summary [default: parsed_log.csv, or report.output from config].
    #[arg(long = "export_csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Echo every line of the log file to the console.
    #[arg(long = "print_log")]
    pub print_log: bool,

    /// Read settings from this file instead of ~/.config/logtally/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic tracing to stderr (filter with RUST_LOG).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}
