use std::io;
use std::process::ExitCode;

use barcode_report::{run, Config, RunStats, WriterDiagnostics};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn try_main(config: &Config) -> anyhow::Result<RunStats> {
    let stats = run(
        config,
        &mut io::stdout().lock(),
        &mut WriterDiagnostics::stderr(),
    )?;
    Ok(stats)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    debug!(?config, "starting");

    match try_main(&config) {
        Ok(stats) => {
            debug!(?stats, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
