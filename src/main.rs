//! dorg: sort a directory's files into date folders.
//!
//! Thin binary entry point. All organizer logic lives in `dorg-core`.
mod cli;

use anyhow::Context;
use cli::Cli;
use dorg_core::RunReport;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_normalized();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli.to_config();
    tracing::debug!("dorg {} starting", env!("CARGO_PKG_VERSION"));
    let report = dorg_core::run(&config)
        .inspect_err(|err| tracing::error!("Run aborted: {err}"))
        .with_context(|| format!("cannot organize {}", config.source.display()))?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    let arrow = if report.dry_run { "would move" } else { "->" };
    for moved in &report.moved {
        println!("{} {arrow} {}", moved.from.display(), moved.to.display());
    }
    for skipped in &report.skipped {
        println!(
            "skipped {} ({})",
            skipped.path.display(),
            skipped.reason.label()
        );
    }
    for failure in &report.failures {
        eprintln!("error: {}: {}", failure.path.display(), failure.message);
    }
    println!("{}", report.summary());
}
