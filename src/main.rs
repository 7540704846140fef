use clap::Parser;
use std::io::{self, ErrorKind};

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use treescan::cli::{Args, CliConfig};
use treescan::{OutcomeFormatter, ScanSummary, TreeScanner};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CliConfig::from_args(args).map_err(|e| anyhow::anyhow!(e.user_message()))?;

    init_tracing(config.default_log_filter());

    let scanner = TreeScanner::new(config.scan_config.clone());
    let stdout = io::stdout();
    let mut formatter = OutcomeFormatter::new(stdout.lock()).with_style(config.value_style());
    let mut summary = ScanSummary::default();

    for outcome in scanner.scan() {
        summary.record(&outcome);

        if config.report_errors() {
            if let Some(error) = outcome.error() {
                warn!("{}", error.user_message());
            }
        }

        if let Err(err) = formatter.write_outcome(&outcome) {
            return quiet_on_broken_pipe(err);
        }
    }

    if let Err(err) = formatter.flush() {
        return quiet_on_broken_pipe(err);
    }

    if config.want_summary() {
        eprintln!("{}", summary);
    }

    // Failures never change the exit status
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn quiet_on_broken_pipe(err: io::Error) -> Result<()> {
    if err.kind() == ErrorKind::BrokenPipe {
        Ok(())
    } else {
        Err(err.into())
    }
}
