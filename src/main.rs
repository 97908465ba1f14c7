use std::process::ExitCode;

use clap::Parser;
use logtally::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("logtally debug log started");
    }

    let config = cli.load_config()?;
    let outcome = logtally::run(&cli, &config, &mut std::io::stdout().lock())?;
    Ok(outcome.exit_code())
}
