//! Configuration types for logtally.
//!
//! [`Config::load`] reads `~/.config/logtally/config.toml` (or
//! `$XDG_CONFIG_HOME/logtally/config.toml`) layered on top of the built-in
//! defaults; a missing file is not an error. [`Config::load_from`] does the
//! same for an explicit path, which must exist. [`Config::defaults`] returns
//! the defaults without touching the filesystem (useful in tests).

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::extract::TimestampMode;
use crate::report::ReportOptions;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[report]
output    = "parsed_log.csv"
delimiter = ","

[extract]
timestamp = "legacy"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// CSV path used when `--export_csv` is not given.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Single ASCII character separating CSV fields.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_output() -> PathBuf { PathBuf::from("parsed_log.csv") }
fn default_delimiter() -> String { ",".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            delimiter: default_delimiter(),
        }
    }
}

impl ReportConfig {
    /// Validate the section and turn it into writer options.
    pub fn options(&self) -> anyhow::Result<ReportOptions> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() && !matches!(*b, b'"' | b'\n' | b'\r') => {
                Ok(ReportOptions { delimiter: *b })
            }
            _ => anyhow::bail!(
                "report.delimiter must be a single ASCII character other than a quote or line break, got {:?}",
                self.delimiter
            ),
        }
    }
}

/// `[extract]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub timestamp: TimestampMode,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the per-user config file, layered on top of the built-in
    /// defaults. The file is optional.
    pub fn load() -> anyhow::Result<Self> {
        Self::build(&config_path(), false)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::build(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn build(path: &Path, required: bool) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| format!("failed to load config from {}", path.display()))?;

        cfg.report
            .options()
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logtally")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
